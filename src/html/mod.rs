mod tag_name;

pub use self::tag_name::{is_raw_text_element, is_void_element, TagName, TagNameHash};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_kinds_by_name() {
        assert!(TagNameHash::from("br") == TagName::Br);
        assert!(is_void_element("img".into()));
        assert!(is_raw_text_element("script".into()));
        assert!(!is_void_element("div".into()));
        assert!(!is_raw_text_element("div".into()));
    }
}
