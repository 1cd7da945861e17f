use crate::ir::{FieldRef, Layout, Row};

/// Width of the first placement of `name`, if it is placed at all.
pub fn get_field_size(name: &str, layout: &[Row]) -> Option<u8> {
    layout
        .iter()
        .flat_map(|row| row.row_content.iter())
        .find(|field| field.name == name)
        .map(|field| field.size)
}

/// Copy of `layout` with every placement of `name` resized to `size`.
pub fn set_field_size(name: &str, size: u8, layout: &[Row]) -> Layout {
    layout
        .iter()
        .map(|row| Row {
            row_id: row.row_id,
            row_content: row
                .row_content
                .iter()
                .map(|field| {
                    if field.name == name {
                        FieldRef::new(name, size)
                    } else {
                        field.clone()
                    }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        vec![
            Row::new(0, vec![FieldRef::new("title", 6), FieldRef::new("slug", 6)]),
            Row::new(1, vec![FieldRef::new("body", 12)]),
        ]
    }

    #[test]
    fn test_get_field_size() {
        assert_eq!(get_field_size("slug", &layout()), Some(6));
        assert_eq!(get_field_size("body", &layout()), Some(12));
    }

    #[test]
    fn test_get_missing_field_size() {
        assert_eq!(get_field_size("missing", &layout()), None);
    }

    #[test]
    fn test_set_field_size_touches_only_matches() {
        let resized = set_field_size("title", 4, &layout());
        assert_eq!(resized[0].row_content[0], FieldRef::new("title", 4));
        assert_eq!(resized[0].row_content[1], FieldRef::new("slug", 6));
        assert_eq!(resized[1], layout()[1]);
    }

    #[test]
    fn test_set_unknown_field_size_is_identity() {
        assert_eq!(set_field_size("missing", 3, &layout()), layout());
    }
}
