//! Static date and schedule corpora used across harnesses.

/// Well-formed `DD.MM.YYYY` texts with their expected (year, month, day).
pub const VALID_DATES: &[(&str, (i32, u32, u32))] = &[
    ("15.08.2025", (2025, 8, 15)),
    ("01.09.2025", (2025, 9, 1)),
    ("1.9.2025", (2025, 9, 1)),
    ("31.12.2025", (2025, 12, 31)),
    ("29.02.2024", (2024, 2, 29)),
    ("05 .10. 2025", (2025, 10, 5)),
    ("\t07.11.2025\n", (2025, 11, 7)),
];

/// Texts that must not produce a date.
pub const MALFORMED_DATES: &[&str] = &[
    "",
    "bad-date",
    "TBD",
    "15/08/2025",
    "15-08-2025",
    "15.08",
    "..",
    "x.y.z",
];

/// A month-spanning schedule with same-day entries and a bad date.
pub const SCHEDULE_ROWS: &[(&str, &str)] = &[
    ("28.08.2025", "Kattakkada"),
    ("01.08.2025", "Thiruvananthapuram"),
    ("15.08.2025", "Neyyattinkara"),
    ("15.08.2025", "Parassala"),
    ("30.08.2025", "Kovalam"),
    ("31.08.2025", "Nemom"),
    ("01.09.2025", "Nedumangad"),
    ("02.09.2025", "Attingal"),
    ("04.10.2025", "Varkala"),
    ("to be fixed", "Fort"),
];
