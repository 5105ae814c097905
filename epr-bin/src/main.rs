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

mod build;
mod error;
mod template;

use crate::build::BuildRequest;
use crate::error::ActionError;

use clap::Parser;
use epr_util::registry::client::Registry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
struct Args {
    /// The Kibana version to download integration packages for, for example 8.13.1
    #[clap(short = 'v', long = "version")]
    version: String,
    /// Base URL of the package registry
    #[clap(long = "registry", default_value = "https://epr.elastic.co")]
    registry: String,
    /// Directory the timestamped build directory is created in
    #[clap(long = "output", default_value = "build")]
    output: PathBuf,
    /// Also download the detached signature each package advertises
    #[clap(long = "with-signatures", action)]
    with_signatures: bool,
}

#[tokio::main]
async fn main() -> Result<(), ActionError> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    info!("starting build for kibana version {}", args.version);

    let registry = Registry::new(args.registry);
    let request = BuildRequest {
        version: args.version,
        output_root: args.output,
        with_signatures: args.with_signatures,
    };
    let outcome = build::run(&registry, &request).await?;

    info!("downloaded {} files to {}", outcome.downloaded, outcome.base_dir.display());
    println!();
    println!("{}", "*".repeat(40));
    println!("EPR build completed");
    println!("Refer to the instructions in: {}", outcome.readme_path.display());
    println!("{}", "*".repeat(40));
    Ok(())
}
