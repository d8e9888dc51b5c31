// Tilefile - Declarative Tile UI Description Format
//
// Copyright (c) 2025 the Tilefile contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end tests for the `tilefile` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_validate_ok() {
    let file = write_temp("root {\n  title: \"Hello\"\n  width: 400\n}\n");
    Command::cargo_bin("tilefile")
        .unwrap()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("item root"));
}

#[test]
fn test_validate_reports_position_on_error() {
    let file = write_temp("root {\n  title \"Hello\"\n}\n");
    Command::cargo_bin("tilefile")
        .unwrap()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_validate_missing_file() {
    Command::cargo_bin("tilefile")
        .unwrap()
        .arg("validate")
        .arg("does-not-exist.tile")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_to_json_shapes() {
    let file = write_temp("root {\n  let x = 500\n  foo: 20\n  bar: expr y + 1\n}\n");
    Command::cargo_bin("tilefile")
        .unwrap()
        .arg("to-json")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"type":"root","foo":20,"bar":{"expression":"y + 1"},"variables":{"x":"500"}}"#,
        ));
}

#[test]
fn test_to_json_pretty() {
    let file = write_temp("{ a: 1 }\n");
    Command::cargo_bin("tilefile")
        .unwrap()
        .arg("to-json")
        .arg(file.path())
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\": 1"));
}
