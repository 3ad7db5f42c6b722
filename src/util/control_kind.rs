//! Control selection for a startup variable, derived from its rule tokens.
//!
//! DESIGN
//! ======
//! Rule strings are inspected once per render and collapsed into a
//! `ControlKind`, so the view and the edit pipeline match on a closed enum
//! instead of re-scanning strings.

#[cfg(test)]
#[path = "control_kind_test.rs"]
mod control_kind_test;

/// Rule tokens that turn a variable into an on/off switch.
pub const BOOLEAN_MARKERS: [&str; 5] = ["boolean", "in:0,1", "in:1,0", "in:true,false", "in:false,true"];

const IN_PREFIX: &str = "in:";

/// Which input widget a variable renders as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// Switch. In string mode the value is `"true"`/`"false"`, otherwise
    /// `"1"`/`"0"`.
    Boolean { string_mode: bool },
    /// Select over a fixed list of literals, in rule order.
    Enumerated { options: Vec<String> },
    /// Free-text input.
    Text,
}

impl ControlKind {
    /// Classify a rule set. Boolean markers win over a plain `in:` list.
    pub fn classify<S: AsRef<str>>(rules: &[S]) -> Self {
        let has = |token: &str| rules.iter().any(|r| r.as_ref() == token);

        if BOOLEAN_MARKERS.iter().any(|&marker| has(marker)) {
            return Self::Boolean {
                string_mode: has("string"),
            };
        }

        match rules.iter().find_map(|r| r.as_ref().strip_prefix(IN_PREFIX)) {
            Some(list) => Self::Enumerated {
                options: list.split(',').map(str::to_owned).collect(),
            },
            None => Self::Text,
        }
    }

    /// Rendered on/off state of `value` for a boolean control.
    ///
    /// Always `false` for non-boolean kinds.
    pub fn is_checked(&self, value: &str) -> bool {
        match self {
            Self::Boolean { string_mode: true } => value == "true",
            Self::Boolean { string_mode: false } => value == "1",
            _ => false,
        }
    }

    /// Value a toggle should submit given the currently rendered `value`.
    pub fn toggled_value(&self, value: &str) -> Option<&'static str> {
        let Self::Boolean { string_mode } = self else {
            return None;
        };
        let next = !self.is_checked(value);
        Some(match (string_mode, next) {
            (true, true) => "true",
            (true, false) => "false",
            (false, true) => "1",
            (false, false) => "0",
        })
    }
}

/// A user interaction on a variable's control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditEvent {
    /// Switch flipped.
    Toggle,
    /// Select changed to the given option.
    Select(String),
    /// Key released in the text field; carries the field's full value.
    Input(String),
}

impl EditEvent {
    /// Value to submit for this event, or `None` when the event does not
    /// apply to `kind` (a toggle on a non-boolean control).
    pub fn submission_value(self, kind: &ControlKind, current: &str) -> Option<String> {
        match self {
            Self::Toggle => kind.toggled_value(current).map(str::to_owned),
            Self::Select(value) | Self::Input(value) => Some(value),
        }
    }
}
