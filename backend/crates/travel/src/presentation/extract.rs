//! Request Extractors
//!
//! Body, path and query extractors whose rejections render as a
//! [`TravelError`] (400) instead of axum's plain-text default.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::TravelError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(TravelError))]
pub struct TravelJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(TravelError))]
pub struct TravelPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(TravelError))]
pub struct TravelQuery<T>(pub T);
