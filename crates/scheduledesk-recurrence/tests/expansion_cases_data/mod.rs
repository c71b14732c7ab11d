use chrono::NaiveDate;
use scheduledesk_core::config::WeekAndDayMode;
use scheduledesk_core::types::DateWindow;
use scheduledesk_recurrence::{EventInstance, RecurrenceExpander, parse_templates};

pub struct ExpansionCase {
    pub name: &'static str,
    pub template: &'static str,
    pub window: (&'static str, &'static str),
    /// Expected `(startDate, endDate)` pairs in output order.
    pub expected: &'static [(&'static str, &'static str)],
    pub max_iterations: Option<u32>,
    pub week_and_day: WeekAndDayMode,
}

const CASE_DEFAULTS: ExpansionCase = ExpansionCase {
    name: "",
    template: "",
    window: ("", ""),
    expected: &[],
    max_iterations: None,
    week_and_day: WeekAndDayMode::Approximate,
};

#[expect(clippy::too_many_lines)]
pub fn expansion_cases() -> Vec<ExpansionCase> {
    vec![
        ExpansionCase {
            name: "weekly_single_day",
            template: r#"{ "id": "w", "startDate": "2025-01-06", "recurrence": "EveryWeek" }"#,
            window: ("2025-01-01", "2025-01-31"),
            expected: &[
                ("2025-01-06", "2025-01-06"),
                ("2025-01-13", "2025-01-13"),
                ("2025-01-20", "2025-01-20"),
                ("2025-01-27", "2025-01-27"),
            ],
            ..CASE_DEFAULTS
        },
        ExpansionCase {
            name: "weekly_three_day_span",
            template: r#"{ "startDate": "2025-01-01", "endDate": "2025-01-03", "recurrence": "EveryWeek" }"#,
            window: ("2025-01-01", "2025-01-15"),
            expected: &[
                ("2025-01-01", "2025-01-03"),
                ("2025-01-08", "2025-01-10"),
                ("2025-01-15", "2025-01-17"),
            ],
            ..CASE_DEFAULTS
        },
        ExpansionCase {
            name: "biweekly_across_year_end",
            template: r#"{ "startDate": "2025-12-15", "recurrence": "EveryOtherWeek" }"#,
            window: ("2025-12-01", "2026-01-31"),
            expected: &[
                ("2025-12-15", "2025-12-15"),
                ("2025-12-29", "2025-12-29"),
                ("2026-01-12", "2026-01-12"),
                ("2026-01-26", "2026-01-26"),
            ],
            ..CASE_DEFAULTS
        },
        ExpansionCase {
            name: "monthly_exact_date",
            template: r#"{ "startDate": "2025-01-15", "recurrence": "EveryMonth", "monthlyRecurrence": { "type": "ExactDate" } }"#,
            window: ("2025-01-01", "2025-04-30"),
            expected: &[
                ("2025-01-15", "2025-01-15"),
                ("2025-02-15", "2025-02-15"),
                ("2025-03-15", "2025-03-15"),
                ("2025-04-15", "2025-04-15"),
            ],
            ..CASE_DEFAULTS
        },
        ExpansionCase {
            name: "monthly_exact_date_leap_february",
            template: r#"{ "startDate": "2024-01-30", "recurrence": "EveryMonth", "monthlyRecurrence": { "type": "ExactDate" } }"#,
            window: ("2024-01-01", "2024-03-31"),
            expected: &[
                ("2024-01-30", "2024-01-30"),
                ("2024-02-29", "2024-02-29"),
                ("2024-03-30", "2024-03-30"),
            ],
            ..CASE_DEFAULTS
        },
        ExpansionCase {
            name: "monthly_two_day_span",
            template: r#"{ "startDate": "2025-01-10", "endDate": "2025-01-11", "recurrence": "EveryMonth" }"#,
            window: ("2025-02-01", "2025-03-31"),
            expected: &[("2025-02-10", "2025-02-11"), ("2025-03-10", "2025-03-11")],
            ..CASE_DEFAULTS
        },
        ExpansionCase {
            name: "week_and_day_approximate",
            template: r#"{ "startDate": "2025-01-14", "recurrence": "EveryMonth", "monthlyRecurrence": { "type": "WeekAndDay" } }"#,
            window: ("2025-01-01", "2025-03-31"),
            expected: &[
                ("2025-01-14", "2025-01-14"),
                ("2025-02-14", "2025-02-14"),
                ("2025-03-14", "2025-03-14"),
            ],
            ..CASE_DEFAULTS
        },
        ExpansionCase {
            name: "week_and_day_nth_weekday",
            template: r#"{ "startDate": "2025-01-14", "recurrence": "EveryMonth", "monthlyRecurrence": { "type": "WeekAndDay" } }"#,
            window: ("2025-01-01", "2025-03-31"),
            expected: &[
                ("2025-01-14", "2025-01-14"),
                ("2025-02-11", "2025-02-11"),
                ("2025-03-11", "2025-03-11"),
            ],
            week_and_day: WeekAndDayMode::NthWeekday,
            ..CASE_DEFAULTS
        },
        ExpansionCase {
            name: "unrecognized_anchor_outside_window",
            template: r#"{ "startDate": "2024-12-01", "recurrence": "BogusValue" }"#,
            window: ("2025-01-01", "2025-12-31"),
            expected: &[],
            ..CASE_DEFAULTS
        },
        ExpansionCase {
            name: "unrecognized_anchor_inside_window",
            template: r#"{ "startDate": "2025-01-05", "recurrence": "BogusValue" }"#,
            window: ("2025-01-01", "2025-12-31"),
            expected: &[("2025-01-05", "2025-01-05")],
            ..CASE_DEFAULTS
        },
        ExpansionCase {
            name: "iteration_cap_two",
            template: r#"{ "startDate": "2025-01-06", "recurrence": "EveryWeek" }"#,
            window: ("2025-01-01", "2025-12-31"),
            expected: &[("2025-01-06", "2025-01-06"), ("2025-01-13", "2025-01-13")],
            max_iterations: Some(2),
            ..CASE_DEFAULTS
        },
        ExpansionCase {
            name: "window_of_one_day",
            template: r#"{ "startDate": "2025-01-06", "recurrence": "EveryWeek" }"#,
            window: ("2025-01-20", "2025-01-20"),
            expected: &[("2025-01-20", "2025-01-20")],
            ..CASE_DEFAULTS
        },
        ExpansionCase {
            name: "window_between_occurrences",
            template: r#"{ "startDate": "2025-01-06", "recurrence": "EveryWeek" }"#,
            window: ("2025-01-21", "2025-01-26"),
            expected: &[],
            ..CASE_DEFAULTS
        },
    ]
}

fn date(value: &str) -> NaiveDate {
    scheduledesk_core::util::date::parse_calendar_date(value).unwrap()
}

pub fn run_case(case: &ExpansionCase) -> Vec<EventInstance> {
    let templates = parse_templates(case.template).unwrap();
    let mut expander = RecurrenceExpander::default().with_week_and_day(case.week_and_day);
    if let Some(max) = case.max_iterations {
        expander = expander.with_max_iterations(max);
    }
    let window = DateWindow::new(date(case.window.0), date(case.window.1));
    expander.expand_all(&templates, &window)
}

pub fn assert_case(case: &ExpansionCase) {
    let instances = run_case(case);
    let actual: Vec<(NaiveDate, NaiveDate)> = instances
        .iter()
        .map(|instance| (instance.start_date, instance.last_date()))
        .collect();
    let expected: Vec<(NaiveDate, NaiveDate)> = case
        .expected
        .iter()
        .map(|(start, end)| (date(start), date(end)))
        .collect();

    assert_eq!(actual, expected, "case {} failed", case.name);
}
