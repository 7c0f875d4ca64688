use super::response::TestResponse;
use reqwest::{
    header::{HeaderName, HeaderValue},
    multipart::Form,
};
use serde::Serialize;

#[derive(Debug)]
pub struct RequestBuilder {
    builder: reqwest::RequestBuilder,
}

#[allow(unused)]
impl RequestBuilder {
    pub(super) fn new(builder: reqwest::RequestBuilder) -> Self {
        RequestBuilder { builder }
    }

    pub async fn send(self) -> TestResponse {
        TestResponse::new(self.builder.send().await.expect("failed to send request"))
    }

    pub fn json<T>(mut self, value: &T) -> RequestBuilder
    where
        T: Serialize,
    {
        self.builder = self.builder.json(value);
        self
    }

    pub fn multipart(mut self, form: Form) -> RequestBuilder {
        self.builder = self.builder.multipart(form);
        self
    }

    pub fn header<K, V>(mut self, key: K, value: V) -> RequestBuilder
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        self.builder = self.builder.header(key, value);
        self
    }
}
