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

use crate::error::ActionError;
use crate::template;

use chrono::Local;
use epr_util::models::PackageEntry;
use epr_util::registry::client::Registry;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct BuildRequest {
    pub version: String,
    pub output_root: PathBuf,
    pub with_signatures: bool,
}

#[derive(Debug)]
pub struct BuildOutcome {
    pub base_dir: PathBuf,
    pub readme_path: PathBuf,
    pub downloaded: usize,
}

struct PlannedFile {
    package: String,
    reference: String,
    file_name: String,
}

fn plan_downloads(packages: &[PackageEntry], with_signatures: bool) -> Vec<PlannedFile> {
    let mut plan = Vec::new();
    for package in packages {
        plan.push(PlannedFile {
            package: package.name.clone(),
            reference: package.download.clone(),
            file_name: package.asset_file_name(),
        });
        if with_signatures {
            if let Some(signature_path) = &package.signature_path {
                plan.push(PlannedFile {
                    package: package.name.clone(),
                    reference: signature_path.clone(),
                    file_name: package.signature_file_name(),
                });
            }
        }
    }
    plan
}

fn create_build_directory(request: &BuildRequest) -> Result<(PathBuf, PathBuf), ActionError> {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    let base_dir = request
        .output_root
        .join(format!("{timestamp}-{}", request.version));
    let integrations_dir = base_dir.join("integrations");
    std::fs::create_dir_all(&integrations_dir)?;
    Ok((base_dir, integrations_dir))
}

fn verify_downloads(integrations_dir: &Path, plan: &[PlannedFile]) -> Result<(), ActionError> {
    let downloaded = std::fs::read_dir(integrations_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect::<HashSet<_>>();
    let missing = plan
        .iter()
        .filter(|file| !downloaded.contains(&file.file_name))
        .map(|file| file.file_name.clone())
        .collect::<Vec<_>>();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ActionError::MissingFiles(missing))
    }
}

/// Run one complete build: query the catalog, download every planned file
/// in catalog order, verify the result and render the two output files.
/// The first failure aborts the run; a partial build directory may remain
/// on disk for the operator to delete.
pub async fn run(registry: &Registry, request: &BuildRequest) -> Result<BuildOutcome, ActionError> {
    let packages = registry
        .search(&request.version)
        .await
        .map_err(ActionError::Catalog)?;
    info!(
        "the catalog lists {} packages for kibana {}",
        packages.len(),
        request.version
    );

    let (base_dir, integrations_dir) = create_build_directory(request)?;
    debug!("build directory: {}", base_dir.display());

    let plan = plan_downloads(&packages, request.with_signatures);
    info!("total files to download: {}", plan.len());

    for (index, file) in plan.iter().enumerate() {
        let path = integrations_dir.join(&file.file_name);
        registry
            .download_to(&file.reference, &path)
            .await
            .map_err(|error| ActionError::Download {
                name: file.package.clone(),
                error,
            })?;
        info!(
            "downloaded ({} of {}) {}",
            index + 1,
            plan.len(),
            file.file_name
        );
    }

    verify_downloads(&integrations_dir, &plan)?;

    let dockerfile_path = base_dir.join("Dockerfile");
    std::fs::write(
        &dockerfile_path,
        template::render(template::DOCKERFILE, &request.version),
    )?;
    info!("dockerfile created at {}", dockerfile_path.display());

    let readme_path = base_dir.join("readme.md");
    std::fs::write(
        &readme_path,
        template::render(template::INSTRUCTIONS, &request.version),
    )?;
    info!("instructions created at {}", readme_path.display());

    Ok(BuildOutcome {
        base_dir,
        readme_path,
        downloaded: plan.len(),
    })
}
