use std::fmt;

/// Ordered CSS declarations for one element.
///
/// Setting a property that is already present replaces its value in place,
/// so declaration order is stable across updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    decls: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.decls.iter_mut().find(|(p, _)| *p == property) {
            Some((_, v)) => *v = value,
            None => self.decls.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls.iter().find(|(p, _)| *p == property).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.decls.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// Multi-line rule block: `selector {\n  prop: value;\n}`.
    pub fn to_rule(&self, selector: &str) -> String {
        let mut out = format!("{selector} {{\n");
        for (p, v) in self.iter() {
            out.push_str(&format!("  {p}: {v};\n"));
        }
        out.push('}');
        out
    }
}

/// Inline form: `prop: value; prop: value;`.
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (p, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{p}: {v};")?;
        }
        Ok(())
    }
}
