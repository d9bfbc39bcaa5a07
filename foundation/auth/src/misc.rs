pub(crate) const EMPTY: &str = "";

pub(crate) trait UnwrapOrEmpty {
    fn unwrap_or_empty(&self) -> String;
}

impl UnwrapOrEmpty for Option<String> {
    fn unwrap_or_empty(&self) -> String {
        self.as_deref().unwrap_or(EMPTY).to_string()
    }
}
