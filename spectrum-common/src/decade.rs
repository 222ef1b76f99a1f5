//! Decade catalogue and display labels

/// A selectable decade: the label shown to users and the code the backend uses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decade {
    pub label: &'static str,
    pub code: &'static str,
}

pub const DECADES: &[Decade] = &[
    Decade { label: ">60s", code: "1900-1960" },
    Decade { label: "70s", code: "1970-1979" },
    Decade { label: "80s", code: "1980-1989" },
    Decade { label: "90s", code: "1990-1999" },
    Decade { label: "2000s", code: "2000-2009" },
    Decade { label: "2010s", code: "2010-2019" },
    Decade { label: "2020s", code: "2020-2029" },
];

/// Older records carry this code for everything before the seventies
const LEGACY_PRE_SEVENTIES: &str = ">1960";

/// Decade the home page stepper starts on
pub const DEFAULT_DECADE_CODE: &str = "2020-2029";

/// Human-readable label for a decade code. Unknown codes are returned as-is.
pub fn decade_label(code: &str) -> &str {
    if code == LEGACY_PRE_SEVENTIES {
        return DECADES[0].label;
    }
    DECADES
        .iter()
        .find(|d| d.code == code)
        .map(|d| d.label)
        .unwrap_or(code)
}

/// Position of a decade code in [`DECADES`].
pub fn decade_index(code: &str) -> Option<usize> {
    DECADES.iter().position(|d| d.code == code)
}

/// Bounded stepper over [`DECADES`], used by the home page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecadeStepper {
    index: usize,
}

impl DecadeStepper {
    /// Start on `code`, or on the first decade when the code is unknown.
    pub fn starting_at(code: &str) -> Self {
        Self {
            index: decade_index(code).unwrap_or(0),
        }
    }

    pub fn current(&self) -> Decade {
        DECADES[self.index]
    }

    pub fn can_decrease(&self) -> bool {
        self.index > 0
    }

    pub fn can_increase(&self) -> bool {
        self.index + 1 < DECADES.len()
    }

    /// Step back one decade. Returns the new decade, or `None` at the start.
    pub fn decrease(&mut self) -> Option<Decade> {
        if !self.can_decrease() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Step forward one decade. Returns the new decade, or `None` at the end.
    pub fn increase(&mut self) -> Option<Decade> {
        if !self.can_increase() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }
}

impl Default for DecadeStepper {
    fn default() -> Self {
        Self::starting_at(DEFAULT_DECADE_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_labels() {
        assert_eq!(decade_label("1900-1960"), ">60s");
        assert_eq!(decade_label("1990-1999"), "90s");
        assert_eq!(decade_label("2020-2029"), "2020s");
    }

    #[test]
    fn legacy_code_maps_to_pre_seventies() {
        assert_eq!(decade_label(">1960"), ">60s");
    }

    #[test]
    fn unknown_code_is_returned_unchanged() {
        assert_eq!(decade_label("1850-1859"), "1850-1859");
        assert_eq!(decade_label(""), "");
    }

    #[test]
    fn stepper_starts_on_default_decade() {
        let stepper = DecadeStepper::default();
        assert_eq!(stepper.current().label, "2020s");
        assert!(stepper.can_decrease());
        assert!(!stepper.can_increase());
    }

    #[test]
    fn stepper_is_bounded() {
        let mut stepper = DecadeStepper::starting_at("1900-1960");
        assert_eq!(stepper.decrease(), None);
        assert_eq!(stepper.increase().map(|d| d.code), Some("1970-1979"));
        for _ in 0..20 {
            stepper.increase();
        }
        assert_eq!(stepper.current().code, "2020-2029");
        assert_eq!(stepper.increase(), None);
    }

    #[test]
    fn stepper_falls_back_to_first_decade() {
        let stepper = DecadeStepper::starting_at("nope");
        assert_eq!(stepper.current().code, "1900-1960");
    }
}
