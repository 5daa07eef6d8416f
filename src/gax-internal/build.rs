// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var_os("OUT_DIR").ok_or("OUT_DIR not specified")?;
    let rust_version = rustc_version::version()?;
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    let contents = format!(
        "pub(crate) const RUSTC_VERSION: &str = \"{rust_version}\";\n\
         pub(crate) const TARGET: &str = \"{target}\";\n"
    );
    std::fs::write(Path::new(&out_dir).join("build_env.rs"), contents)?;
    Ok(())
}
