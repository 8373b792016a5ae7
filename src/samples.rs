//! Sample tinylang programs
//!
//! The `samples/` directory holds the canonical programs used by the tests and
//! the `demo` command. They are embedded at compile time so callers never
//! depend on the working directory.

/// A sample program and whether it should be accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub name: &'static str,
    pub source: &'static str,
    pub valid: bool,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "01-declaration-and-assignment.tl",
        source: include_str!("../samples/01-declaration-and-assignment.tl"),
        valid: true,
    },
    Sample {
        name: "02-conditional.tl",
        source: include_str!("../samples/02-conditional.tl"),
        valid: true,
    },
    Sample {
        name: "03-float-declaration.tl",
        source: include_str!("../samples/03-float-declaration.tl"),
        valid: true,
    },
    Sample {
        name: "04-nested-blocks.tl",
        source: include_str!("../samples/04-nested-blocks.tl"),
        valid: true,
    },
    Sample {
        name: "90-missing-identifier.tl",
        source: include_str!("../samples/90-missing-identifier.tl"),
        valid: false,
    },
    Sample {
        name: "91-unrecognized-character.tl",
        source: include_str!("../samples/91-unrecognized-character.tl"),
        valid: false,
    },
    Sample {
        name: "92-unclosed-block.tl",
        source: include_str!("../samples/92-unclosed-block.tl"),
        valid: false,
    },
];

/// The three programs run by the demonstration driver, in order
pub const DEMO_PROGRAMS: &[&str] = &[
    "int x = 10; x = x + 5;",
    "if (x > 0) { x = x - 1; }",
    "float y = 3.14;",
];

/// Look up a sample by file name
pub fn get(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.name == name)
}
