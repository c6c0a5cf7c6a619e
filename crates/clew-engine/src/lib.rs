// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! C4: the hybrid orchestrator and semantic hole detector — the two public
//! entry points (`extract`, `detect_holes`) the rest of Clew is built
//! around.

mod holes;
mod orchestrator;

pub use holes::{detect as detect_holes_in_tree, detect_holes};
pub use orchestrator::{extract, ExtractionResult, Orchestrator, Strategy};
