use chrono::{DateTime, Utc};
use ratatui::{style::Style, text::Span};
use talent_api::endpoints::talents::Profile;

use super::theme;

/// Experience column, e.g. "4 yrs • Frontend"
pub fn format_experience(talent: &Profile) -> String {
    format!("{} yrs • {}", talent.years_experience, talent.primary_skill)
}

/// Hourly rate without cents when the rate is whole, e.g. "$20/hr", "$32.50/hr"
pub fn format_rate(rate_usd_per_hour: f64) -> String {
    if rate_usd_per_hour.fract() == 0.0 {
        format!("${:.0}/hr", rate_usd_per_hour)
    } else {
        format!("${:.2}/hr", rate_usd_per_hour)
    }
}

pub fn fmt_rating(rating: f64) -> Span<'static> {
    Span::styled(
        format!("★ {:.1}", rating),
        Style::default().fg(theme::COLOR_RATING),
    )
}

pub fn fmt_verified(verified: bool) -> Span<'static> {
    if verified {
        Span::styled("✓", Style::default().fg(theme::COLOR_SUCCESS))
    } else {
        Span::styled("·", Style::default().fg(theme::COLOR_MUTED))
    }
}

pub fn format_availability(hrs_per_week: u32) -> String {
    format!("{} hrs/week", hrs_per_week)
}

/// Date plus a coarse relative age, e.g. "2025-09-12 (3 days ago)"
pub fn format_last_active(last_active: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - last_active).num_days();
    let relative = match days {
        d if d < 0 => "in the future".to_string(),
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        d if d < 30 => format!("{} days ago", d),
        d if d < 365 => format!("{} months ago", d / 30),
        d => format!("{} years ago", d / 365),
    };

    format!("{} ({})", last_active.format("%Y-%m-%d"), relative)
}

/// Comma-joined list, or a dash when empty
pub fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::profile;
    use chrono::TimeZone;
    use talent_api::endpoints::{Skill, YearsExperience};

    #[test]
    fn test_format_experience() {
        let talent = profile("t_001", "Amara Okoye", Skill::Frontend, 4);
        assert_eq!(format_experience(&talent), "4 yrs • Frontend");

        let mut talent = profile("t_002", "Bola Adeyemi", Skill::Fullstack, 0);
        talent.years_experience = YearsExperience::new(2.5).unwrap();
        assert_eq!(format_experience(&talent), "2.5 yrs • Fullstack");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(20.0), "$20/hr");
        assert_eq!(format_rate(32.5), "$32.50/hr");
    }

    #[test]
    fn test_format_last_active() {
        let now = Utc.with_ymd_and_hms(2025, 9, 15, 12, 0, 0).unwrap();
        let seen = Utc.with_ymd_and_hms(2025, 9, 12, 10, 15, 0).unwrap();
        assert_eq!(format_last_active(seen, now), "2025-09-12 (3 days ago)");
        assert_eq!(format_last_active(now, now), "2025-09-15 (today)");

        let long_ago = Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap();
        assert_eq!(format_last_active(long_ago, now), "2023-09-01 (2 years ago)");
    }

    #[test]
    fn test_fmt_verified() {
        let verified = fmt_verified(true);
        assert_eq!(verified.content, "✓");
        assert_eq!(verified.style.fg, Some(theme::COLOR_SUCCESS));

        let unverified = fmt_verified(false);
        assert_eq!(unverified.content, "·");
        assert_eq!(unverified.style.fg, Some(theme::COLOR_MUTED));
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[]), "-");
        assert_eq!(
            format_list(&["React".to_string(), "Next.js".to_string()]),
            "React, Next.js"
        );
    }
}
