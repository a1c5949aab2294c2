// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! L-shaped and U-shaped stairs: two flights joined by a square corner landing

use super::{BuildOutput, FlightLayout};
use crate::config::GeneratorConfig;
use crate::geometry::{Cursor, FlightFrame};
use crate::spec::ValidatedSpec;
use tracing::debug;

/// Direction change at the corner landing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Turn {
    /// L-shaped: second flight climbs along `+x`
    Quarter,
    /// U-shaped: second flight climbs back along `-z`, one stair width over.
    /// The landing stays `width × width` and spans `x ∈ [0, width]`, so it
    /// covers the inner half of each flight's exit; the outer halves are
    /// left open.
    Half,
}

pub(super) fn build(spec: ValidatedSpec<'_>, config: &GeneratorConfig, turn: Turn) -> BuildOutput {
    let layout = FlightLayout::new(&spec, config);
    let width = spec.clear_width;
    let first = FlightFrame::along_z();

    let mut elements = Vec::with_capacity(3 * spec.total_risers() as usize + 1);

    let lower = layout.flight(
        &first,
        Cursor::origin(),
        spec.risers_per_flight[0],
        &mut elements,
    );
    let top = lower.end;

    // Landing centre shifts sideways for the half turn so it bridges both flights
    let (second, landing_edge, upper_start) = match turn {
        Turn::Quarter => {
            let second = FlightFrame::along_x();
            let start = top
                .advance(&first, width / 2.0)
                .offset(second.forward * (width / 2.0));
            (second, top.point(), start)
        }
        Turn::Half => {
            let second = first.reversed();
            let edge = top.offset(first.lateral * (width / 2.0)).point();
            let start = top.offset(first.lateral * width);
            (second, edge, start)
        }
    };

    debug!(?turn, "laid corner landing");
    elements.push(layout.landing(&first, landing_edge, width, width));

    let upper = layout.flight(
        &second,
        upper_start,
        spec.risers_per_flight[1],
        &mut elements,
    );

    BuildOutput {
        elements,
        flights: vec![lower, upper],
        cursor: upper.end,
    }
}
