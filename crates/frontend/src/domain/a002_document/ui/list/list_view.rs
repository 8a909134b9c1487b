pub const EMPTY_LIST_TEXT: &str = "업로드된 문서가 없습니다.";

/// What the document sidebar shows. Each load replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DocumentListView {
    /// Before the first response.
    #[default]
    Pending,
    Empty,
    Entries(Vec<String>),
}

impl DocumentListView {
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            DocumentListView::Empty
        } else {
            DocumentListView::Entries(names)
        }
    }

    pub fn names(&self) -> &[String] {
        match self {
            DocumentListView::Entries(names) => names,
            _ => &[],
        }
    }
}

pub fn delete_confirm_text(name: &str) -> String {
    format!("\"{}\" 문서를 삭제하시겠습니까?", name)
}

pub fn deleted_text(name: &str) -> String {
    format!("문서 \"{}\"이(가) 삭제되었습니다.", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        let view = DocumentListView::from_names(Vec::new());
        assert_eq!(view, DocumentListView::Empty);
        assert!(view.names().is_empty());
    }

    #[test]
    fn test_one_entry_per_name() {
        let view = DocumentListView::from_names(vec!["a.pdf".into(), "b.txt".into()]);
        assert_eq!(view.names(), ["a.pdf".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn test_messages() {
        assert_eq!(delete_confirm_text("a.pdf"), "\"a.pdf\" 문서를 삭제하시겠습니까?");
        assert_eq!(deleted_text("a.pdf"), "문서 \"a.pdf\"이(가) 삭제되었습니다.");
    }
}
