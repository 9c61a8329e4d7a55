// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod categories;
pub mod transactions;
pub mod overview;
pub mod chart;
pub mod exporter;
pub mod doctor;

use crate::api::FinanceApi;
use crate::bridge::HostBridge;
use crate::notify::NoticeKind;
use crate::session::{FinanceSession, SubmitOutcome};

/// Print whatever notice the last write left behind.
pub fn report<A: FinanceApi, B: HostBridge>(
    session: &FinanceSession<A, B>,
    outcome: SubmitOutcome,
) {
    match outcome {
        SubmitOutcome::Submitted | SubmitOutcome::Failed => {
            if let Some(n) = session.last_notice() {
                match n.kind {
                    NoticeKind::Success => println!("{}", n.message),
                    NoticeKind::Error => eprintln!("{}", n.message),
                }
            }
        }
        SubmitOutcome::Busy => eprintln!("Another change is still being saved"),
        SubmitOutcome::Invalid | SubmitOutcome::NoForm => {}
    }
}
