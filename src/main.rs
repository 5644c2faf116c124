// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Pathwright: replay an event script against the reference canvas

fn main() -> anyhow::Result<()> {
    pathwright::run()
}
