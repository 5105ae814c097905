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

use serde::{Deserialize, Serialize};

/// One package advertised by the registry search endpoint. The registry
/// returns more fields than these; unknown fields are ignored.
#[derive(PartialEq, Eq, Serialize, Deserialize, Clone, Debug)]
pub struct PackageEntry {
    pub name: String,
    pub version: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Download reference of the package archive, usually a path fragment
    /// relative to the registry base URL
    pub download: String,
    pub path: Option<String>,
    /// Download reference of the detached signature, if the registry
    /// publishes one for this package
    pub signature_path: Option<String>,
}

impl PackageEntry {
    pub fn asset_file_name(&self) -> String {
        format!("{}-{}.zip", self.name, self.version)
    }

    pub fn signature_file_name(&self) -> String {
        format!("{}.sig", self.asset_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_search_entry() {
        let input = r#"
            {
                "name": "apache",
                "title": "Apache HTTP Server",
                "version": "1.3.4",
                "release": "ga",
                "description": "Apache HTTP server logs and metrics",
                "type": "integration",
                "download": "/epr/apache/apache-1.3.4.zip",
                "path": "/package/apache/1.3.4",
                "signature_path": "/epr/apache/apache-1.3.4.zip.sig"
            }
        "#;
        let entry: PackageEntry = serde_json::from_str(input).unwrap();
        assert_eq!(entry.name, "apache");
        assert_eq!(entry.version, "1.3.4");
        assert_eq!(entry.download, "/epr/apache/apache-1.3.4.zip");
        assert_eq!(
            entry.signature_path.as_deref(),
            Some("/epr/apache/apache-1.3.4.zip.sig")
        );
    }

    #[test]
    fn test_decode_entry_without_optional_fields() {
        let input = r#"{"name": "nginx", "version": "2.0.0", "download": "/epr/nginx/nginx-2.0.0.zip"}"#;
        let entry: PackageEntry = serde_json::from_str(input).unwrap();
        assert_eq!(entry.title, None);
        assert_eq!(entry.signature_path, None);
    }

    #[test]
    fn test_asset_file_names() {
        let entry = PackageEntry {
            name: "apache".to_string(),
            version: "1.3.4".to_string(),
            title: None,
            description: None,
            download: "/epr/apache/apache-1.3.4.zip".to_string(),
            path: None,
            signature_path: None,
        };
        assert_eq!(entry.asset_file_name(), "apache-1.3.4.zip");
        assert_eq!(entry.signature_file_name(), "apache-1.3.4.zip.sig");
    }
}
