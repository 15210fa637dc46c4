//! Ordered request parameters.

/// Where a parameter lands in the built URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Appended to the path as `/value`
    Path,
    /// Rendered in the query string as `name=value`
    Query,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub placement: Placement,
    pub value: Option<String>,
}

/// Parameters in declaration order. `None` values are kept here and skipped at URL build time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<Param>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path<V: ToString>(mut self, name: &'static str, value: Option<V>) -> Self {
        self.push(name, Placement::Path, value);
        self
    }

    pub fn query<V: ToString>(mut self, name: &'static str, value: Option<V>) -> Self {
        self.push(name, Placement::Query, value);
        self
    }

    fn push<V: ToString>(&mut self, name: &'static str, placement: Placement, value: Option<V>) {
        self.entries.push(Param {
            name,
            placement,
            value: value.map(|v| v.to_string()),
        });
    }

    /// Replaces the value of an existing parameter, or appends it as a query parameter.
    pub fn set<V: ToString>(&mut self, name: &'static str, value: Option<V>) {
        let value = value.map(|v| v.to_string());
        match self.entries.iter_mut().find(|p| p.name == name) {
            Some(param) => param.value = value,
            None => self.entries.push(Param {
                name,
                placement: Placement::Query,
                value,
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.value.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.entries.iter()
    }

    /// Non-null parameters with the given placement, in declaration order.
    pub fn present(&self, placement: Placement) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .filter(move |p| p.placement == placement)
            .filter_map(|p| p.value.as_deref().map(|v| (p.name, v)))
    }
}
