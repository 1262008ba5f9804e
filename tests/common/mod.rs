//! Shared test fixtures for the Digikala SDK integration tests.
//!
//! Provides sample response documents shaped like the live API, plus a
//! `FakeTransport` that serves canned bodies and records every request so
//! tests can run the client without touching the network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dgkala_sdk::{DgkalaClient, DgkalaError, Endpoints, RequestHeaders, Result, Transport};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Response documents
// ---------------------------------------------------------------------------

pub fn offer_json(id: u64, product_id: u64) -> Value {
    json!({
        "Id": id,
        "ProductId": product_id,
        "Title": "Galaxy A52",
        "ImagePaths": {
            "Original": "Image/Webstore/Product/P_1/Original.jpg",
            "Size70": "Image/Webstore/Product/P_1/70.jpg",
            "Size110": "Image/Webstore/Product/P_1/110.jpg",
            "Size180": "Image/Webstore/Product/P_1/180.jpg",
            "Size220": "Image/Webstore/Product/P_1/220.jpg"
        },
        "BannerPath": "Image/Banner/desktop.jpg",
        "BannerPathMobile": "Image/Banner/mobile.jpg",
        "BannerPathTablet": "Image/Banner/tablet.jpg",
        "Row": 1,
        "ProductTitleFa": "گوشی موبایل سامسونگ",
        "ProductTitleEn": "Samsung Galaxy A52",
        "Discount": 15,
        "Price": 89_000_000u64,
        "OnlyForApplication": false,
        "OnlyForMembers": true
    })
}

pub fn offers_document() -> Value {
    json!({
        "Data": [offer_json(11, 1001), offer_json(12, 1002), offer_json(13, 1003)],
        "Status": "Success"
    })
}

/// A fully populated `_source` document.
pub fn hit_source(id: i64) -> Value {
    json!({
        "Id": id,
        "FaTitle": "لپ تاپ",
        "EnTitle": format!("Laptop {id}"),
        "ImagePath": format!("Image/Webstore/Product/P_{id}/220.jpg"),
        "ExistStatus": 2,
        "IsActive": true,
        "UrlCode": format!("laptop-{id}"),
        "Rate": 82,
        "MinPrice": 450_000_000i64,
        "MaxPrice": 470_000_000i64,
        "LikeCounter": 31,
        "LastPeriodLikeCounter": 4,
        "ViewCounter": 12_000,
        "LastPeriodViewCounter": 900,
        "IsSpecialOffer": false,
        "RegDateTime": "2017-05-14T09:30:15",
        "HasVideo": true,
        "ProductColorList": [
            {"ColorTitle": "مشکی", "ColorHex": "#000000", "ColorCode": "black"},
            {"ColorTitle": "نقره ای", "ColorHex": "#C0C0C0", "ColorCode": "silver"}
        ],
        "UserRating": 140,
        "FavoriteCounter": 55,
        "LastPeriodFavoriteCounter": 6,
        "LastPeriodSaleCounter": 19,
        "HasGift": false,
        "DetailSource": "<ul><li>Core i7</li></ul>"
    })
}

pub fn search_document(sources: Vec<Value>) -> Value {
    let hits: Vec<Value> = sources
        .into_iter()
        .map(|source| json!({"_index": "products", "_score": 1.0, "_source": source}))
        .collect();
    json!({
        "took": 17,
        "timed_out": false,
        "hits": {
            "total": 1342,
            "max_score": 1.0,
            "hits": hits
        }
    })
}

pub fn product_document(id: u64) -> Value {
    json!({
        "Data": {
            "Id": id,
            "EnTitle": "Samsung Galaxy A52",
            "FaTitle": "گوشی موبایل سامسونگ",
            "Description": "Mid-range phone",
            "ImagePaths": {
                "Original": "Image/P/Original.jpg",
                "Size70": "Image/P/70.jpg",
                "Size110": "Image/P/110.jpg",
                "Size180": "Image/P/180.jpg",
                "Size220": "Image/P/220.jpg"
            },
            "IsIncredibleOffer": true,
            "Strengths": "Battery life",
            "Weaknesses": "Plastic body",
            "MinPrice": 89_000_000u64
        },
        "Status": "Success"
    })
}

pub fn to_bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap()
}

// ---------------------------------------------------------------------------
// FakeTransport
// ---------------------------------------------------------------------------

/// One request seen by a [`FakeTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: RequestHeaders,
    pub timeout: Duration,
}

/// Canned outcome of a request.
pub enum Reply {
    Body(Vec<u8>),
    Status(u16),
}

/// Serves queued replies in order and records each request.
#[derive(Clone, Default)]
pub struct FakeTransport {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeTransport {
    pub fn replying(replies: Vec<Reply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            requests: Arc::default(),
        }
    }

    pub fn with_body(body: &Value) -> Self {
        Self::replying(vec![Reply::Body(to_bytes(body))])
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, headers: &RequestHeaders, timeout: Duration) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            timeout,
        });
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status)) => Err(DgkalaError::Status {
                status,
                url: url.to_string(),
            }),
            None => panic!("FakeTransport has no reply queued for {url}"),
        }
    }
}

/// A client over `transport`, with endpoints on a fake host.
pub fn client_with(transport: FakeTransport) -> DgkalaClient {
    DgkalaClient::builder()
        .endpoints(Endpoints::with_base("http://dgkala.test"))
        .transport(transport)
        .build()
        .unwrap()
}
