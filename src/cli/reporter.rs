// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::assembly::GeometryModel;
use crate::error::{StairError, Violation};
use crate::spec::StaircaseSpec;
use colored::*;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Summary of a generated model
    pub fn report_model(source: &str, spec: &StaircaseSpec, model: &GeometryModel) {
        let meta = model.metadata();
        let stats = model.stats();

        println!("\n{}", "━".repeat(72).bright_black());
        println!("{} {}", "Spec:".bold(), source.cyan());
        println!("{}", "━".repeat(72).bright_black());

        println!(
            "{} {} {}",
            "✅".green(),
            format!("{} staircase generated", meta.typology).green().bold(),
            format!("({} elements)", stats.element_count).bright_black()
        );

        println!("\n{}", "Dimensions:".bold());
        Self::print_row("Flights", &meta.flight_count.to_string());
        Self::print_row("Risers", &meta.total_risers.to_string());
        Self::print_row("Rise / tread", &format!("{:.3} / {:.3} m", spec.rise, spec.tread));
        Self::print_row("2R + T", &format!("{:.3} m", spec.going()));
        Self::print_row("Total rise", &format!("{:.3} m", meta.total_rise));
        Self::print_row("Horizontal run", &format!("{:.3} m", meta.horizontal_run));
        if !meta.bounds.is_empty() {
            let size = meta.bounds.size();
            Self::print_row(
                "Envelope",
                &format!("{:.3} × {:.3} × {:.3} m", size.x, size.y, size.z),
            );
        }
        Self::print_row(
            "Handrail segments",
            &meta.handrail_segments.len().to_string(),
        );

        println!("\n{}", "Elements:".bold());
        for (role, count) in &stats.by_role {
            Self::print_row(&format!("{role:?}"), &count.to_string());
        }

        println!("\n{}", "Quantities:".bold());
        for (material, volume) in &stats.volume_by_material {
            Self::print_row(material.as_str(), &format!("{volume:.4} m³"));
        }

        println!("{}", "━".repeat(72).bright_black());
    }

    /// Each violation on its own line
    pub fn report_rejection(source: &str, error: &StairError) {
        println!("\n{} {}", "❌".red(), format!("{source} rejected").red().bold());

        let violations = error.violations();
        if violations.is_empty() {
            println!("  {}", error.to_string().yellow());
            return;
        }

        for violation in violations {
            let tag = match violation {
                Violation::Dimension(_) => "dimension",
                Violation::Configuration(_) => "configuration",
            };
            println!("  {} {}", format!("[{tag}]").bright_black(), violation);
        }
    }

    pub fn report_accepted(source: &str) {
        println!("{} {}", "✅".green(), format!("{source} is valid").green());
    }

    pub fn report_error(message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    fn print_row(label: &str, value: &str) {
        println!("  {:<20} {}", format!("{label}:").bright_black(), value.cyan());
    }
}
