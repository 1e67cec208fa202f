use super::*;

impl QuillConfig {
    /// Get a typed value from the document.
    ///
    /// `path` is a key, optionally followed by array indices: `ports.0`,
    /// `grid.1.0`.
    ///
    /// # Examples
    /// ```
    /// # use quill_cfg::QuillConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = QuillConfig::from_str("host : 'localhost'\nports : { 80 . 443 }")?;
    /// let host: String = config.get("host")?;
    /// let https: u16 = config.get("ports.1")?;
    /// let ports: Vec<u16> = config.get("ports")?;
    /// assert_eq!((host.as_str(), https, ports), ("localhost", 443, vec![80, 443]));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// `NotFound` if the path doesn't exist, `TypeError` if the value can't be
    /// converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T>
    where
        T: TryFrom<Value, Error = QuillError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| match e {
            QuillError::TypeError { message } => QuillError::TypeError {
                message: format!("{} (at '{}')", message, path),
            },
            other => other,
        })
    }

    /// Get an optional typed value - returns `None` if the path doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>>
    where
        T: TryFrom<Value, Error = QuillError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(QuillError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default for missing or mistyped paths.
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = QuillError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value` from the document.
    pub fn get_value(&self, path: &str) -> Result<Value> {
        self.lookup(path).cloned().ok_or_else(|| QuillError::NotFound {
            path: path.to_string(),
        })
    }

    /// Check if a path exists.
    pub fn has(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Top-level keys in the order they were first bound.
    pub fn keys(&self) -> Vec<String> {
        self.document.keys().cloned().collect()
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.trim().split('.');
        let mut current = self.document.get(segments.next()?)?;

        for seg in segments {
            let index: usize = seg.parse().ok()?;
            current = current.as_array()?.get(index)?;
        }

        Some(current)
    }
}
