//! Plain-text rendering of analyses, history and tips.

use facemetric_core::golden::phi_progress;
use facemetric_core::{styling_tips, AnalysisData, ScoreBand, StylingTips};
use facemetric_store::HistoryItem;
use std::fmt::Write;

/// Render one analysis. `measured` is false for the manual path, whose
/// ratios are never collected.
pub fn render_analysis(data: &AnalysisData, measured: bool) -> String {
    let mut out = String::new();
    let score = data.ratio.score;
    let _ = writeln!(out, "Face shape:   {}", data.shape);
    let _ = writeln!(out, "Golden ratio: {score}/100 ({})", ScoreBand::from_score(score));

    if measured {
        let r = &data.ratio.ratios;
        let _ = writeln!(
            out,
            "  face length / width:  {:.2} ({:.0}% of phi)",
            r.face_ratio,
            phi_progress(r.face_ratio)
        );
        let _ = writeln!(out, "  eye span / nose width: {:.2}", r.nose_eye_ratio);
        let _ = writeln!(out, "  mouth / nose width:    {:.2}", r.lips_nose_ratio);
    }

    if let Some(tips) = styling_tips(data.shape) {
        out.push('\n');
        out.push_str(&render_tips(tips));
    }
    out
}

pub fn render_tips(tips: &StylingTips) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Hairstyle: {}", tips.hairstyle);
    let _ = writeln!(out, "Glasses:   {}", tips.glasses);
    if let Some(makeup) = &tips.makeup {
        let _ = writeln!(out, "Makeup:    {makeup}");
    }
    out
}

/// Every shape's tips under a shape heading, blank line between entries.
pub fn render_all_tips(all: &[StylingTips]) -> String {
    let mut out = String::new();
    for (i, tips) in all.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", tips.shape);
        out.push_str(&render_tips(tips));
    }
    out
}

pub fn render_history(items: &[HistoryItem]) -> String {
    if items.is_empty() {
        return "No analyses recorded\n".to_string();
    }
    let mut out = String::new();
    for item in items {
        let _ = writeln!(
            out,
            "{}  {:<7} {:<7} {:>3}  face ratio {:.2}  {}",
            item.date.format("%Y-%m-%d %H:%M"),
            item.source,
            item.shape,
            item.score,
            item.ratios.face_ratio,
            item.id
        );
    }
    out
}
