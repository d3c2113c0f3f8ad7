// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Developer task runner for the workspace (`cargo xtask ...`).

use std::process::{Command, ExitCode};

use clap::{Parser, Subcommand};

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Run the full test suite across every workspace member.
    Test,
    /// Run the CRC throughput benchmarks.
    Bench,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let cargo = which::which("cargo").unwrap_or_else(|_| "cargo".into());

    let status = match cli.command {
        Task::Test => Command::new(&cargo).args(["test", "--workspace"]).status(),
        Task::Bench => Command::new(&cargo)
            .args(["bench", "-p", "paramcrc"])
            .status(),
    };

    match status {
        Ok(status) if status.success() => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
