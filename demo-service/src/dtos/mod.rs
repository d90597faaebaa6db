//! Response bodies. Every field is a compile-time literal, so repeated
//! requests serialize to identical bytes.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HomeResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InfoResponse {
    pub app_name: &'static str,
    pub author: &'static str,
    pub description: &'static str,
}
