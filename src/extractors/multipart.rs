use crate::error::{self, Error};
use axum::{
    async_trait,
    extract::{FromRequest, Request},
};
use std::ops::{Deref, DerefMut};

/// `axum::extract::Multipart` with a JSON rejection.
pub struct Multipart(pub axum::extract::Multipart);

#[async_trait]
impl<S> FromRequest<S> for Multipart
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Multipart::from_request(req, state).await {
            Ok(multipart) => Ok(Self(multipart)),
            Err(rejection) => {
                debug!("rejected multipart request: {}", rejection.body_text());
                Err(error::MULTIPART_INVALID)
            }
        }
    }
}

impl Deref for Multipart {
    type Target = axum::extract::Multipart;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Multipart {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
