//! Energy saving tips and reference information.
//!
//! Static content only. The tips accompany the calculator but read nothing
//! from it. Grouped as general home tips, per-appliance advice, and a short
//! primer on the bill itself.

use std::fmt;

/// One titled group of tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipSection {
    pub title: &'static str,
    pub tips: &'static [&'static str],
}

/// All tip sections in display order.
pub fn sections() -> &'static [TipSection] {
    &[
        TipSection {
            title: "Home Energy Tips",
            tips: &[
                "Use LED bulbs to reduce lighting consumption",
                "Set AC temperature to 24\u{b0}C for optimal efficiency",
                "Unplug electronics when not in use",
                "Use natural light during daytime",
                "Regular maintenance of appliances",
            ],
        },
        TipSection {
            title: "AC Efficiency Tips",
            tips: &[
                "Clean filters regularly",
                "Use ceiling fans to circulate air",
                "Seal doors and windows properly",
                "Use timer function wisely",
                "Consider inverter AC for better efficiency",
            ],
        },
        TipSection {
            title: "Refrigerator Tips",
            tips: &[
                "Keep refrigerator at 37-40\u{b0}F",
                "Don't overfill or underfill",
                "Check door seals regularly",
                "Allow hot food to cool before storing",
                "Clean coils periodically",
            ],
        },
        TipSection {
            title: "Understanding Your Bill",
            tips: &[
                "1 kW = 1000 watts",
                "Average cost: \u{20b9}5-8 per kWh",
                "Peak hours typically cost more",
                "Solar panels can reduce bills by 70-90%",
                "Energy-efficient appliances save money long-term",
            ],
        },
    ]
}

/// Renders every tip section as a plain-text block.
pub struct TipsReport;

impl fmt::Display for TipsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Energy Saving Tips & Information")?;
        writeln!(f, "================================")?;
        for section in sections() {
            writeln!(f)?;
            writeln!(f, "{}", section.title)?;
            for tip in section.tips {
                writeln!(f, "  - {tip}")?;
            }
        }
        Ok(())
    }
}
