// Copyright (c) 2023 Yan Ka, Chiu.
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions
// are met:
// 1. Redistributions of source code must retain the above copyright
//    notice, this list of conditions, and the following disclaimer,
//    without modification, immediately at the beginning of the file.
// 2. The name of the author may not be used to endorse or promote products
//    derived from this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE AUTHOR AND CONTRIBUTORS ``AS IS'' AND
// ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE AUTHOR OR CONTRIBUTORS BE LIABLE FOR
// ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS
// OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION)
// HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT
// LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
// OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
// SUCH DAMAGE.

use crate::models::PackageEntry;

use reqwest::{Client, ClientBuilder, Response};
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed response {0:?}")]
    UnsuccessfulResponse(Response),
    #[error("unexpected schema: {0:?}")]
    DecodingFailure(serde_json::Error),
    #[error("cannot send request: {0:?}")]
    ReqwestError(reqwest::Error),
    #[error("ioError: {0}")]
    IoError(std::io::Error),
}

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> ClientError {
        ClientError::IoError(e)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> ClientError {
        ClientError::DecodingFailure(e)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> ClientError {
        ClientError::ReqwestError(e)
    }
}

#[derive(Clone, Debug)]
pub struct Registry {
    pub(crate) client: Client,
    pub base_url: String,
}

impl Registry {
    pub fn new(base_url: String) -> Registry {
        let client = ClientBuilder::new().build().unwrap();
        Registry { client, base_url }
    }

    // the registry advertises download references as path fragments, but
    // nothing stops it from returning a full URL
    fn resolve_reference(&self, reference: &str) -> String {
        if reference.starts_with('/') {
            format!("{}{}", self.base_url, reference)
        } else {
            reference.to_string()
        }
    }

    /// Query the catalog for every package compatible with the given
    /// Kibana version. An empty catalog is a successful, empty vec.
    pub async fn search(&self, kibana_version: &str) -> Result<Vec<PackageEntry>, ClientError> {
        let base_url = &self.base_url;
        let request = self
            .client
            .get(format!("{base_url}/search?kibana.version={kibana_version}"));
        debug!("search request: {request:#?}");
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ClientError::UnsuccessfulResponse(response));
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Download the asset at `reference` to a new file at `path`
    ///
    /// # Arguments
    ///
    /// * `reference` - The download reference from a catalog entry
    /// * `path` - The destination file path, must not exist yet
    pub async fn download_to(
        &self,
        reference: &str,
        path: impl AsRef<Path>,
    ) -> Result<(), ClientError> {
        let url = self.resolve_reference(reference);
        debug!("downloading {url}");
        let mut response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::UnsuccessfulResponse(response));
        }
        let mut file = std::fs::OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(path)?;
        while let Some(bytes) = response.chunk().await? {
            file.write_all(&bytes)?;
        }
        Ok(())
    }
}
