use indexmap::IndexMap;

/// Read access to the page the CSRF information lives in.
pub trait Document {
    /// Content of the `<meta name="{name}">` tag. `None` if there is no such
    /// tag, `Some("")` if the tag has no `content` attribute.
    fn meta_content(&self, name: &str) -> Option<String>;

    /// The raw `document.cookie` string, e.g. `"a=1; XSRF-TOKEN=abc"`.
    fn cookie(&self) -> String;

    /// The page URL. Relative request URLs are resolved against it and it
    /// decides which requests count as same-origin.
    fn location(&self) -> Option<String> {
        None
    }
}

/// An in-memory [`Document`].
#[derive(Debug, Clone, Default)]
pub struct StaticDocument {
    meta: IndexMap<String, String>,
    cookie: String,
    location: Option<String>,
}

impl StaticDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a meta tag.
    pub fn with_meta(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.meta.insert(name.into(), content.into());
        self
    }

    /// Set the cookie string.
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = cookie.into();
        self
    }

    /// Set the page URL.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Remove a meta tag, returning its content.
    pub fn remove_meta(&mut self, name: &str) -> Option<String> {
        self.meta.shift_remove(name)
    }
}

impl Document for StaticDocument {
    fn meta_content(&self, name: &str) -> Option<String> {
        self.meta.get(name).cloned()
    }

    fn cookie(&self) -> String {
        self.cookie.clone()
    }

    fn location(&self) -> Option<String> {
        self.location.clone()
    }
}

impl<D: Document + ?Sized> Document for &D {
    fn meta_content(&self, name: &str) -> Option<String> {
        (**self).meta_content(name)
    }

    fn cookie(&self) -> String {
        (**self).cookie()
    }

    fn location(&self) -> Option<String> {
        (**self).location()
    }
}
