//! Object ids from resource URLs.

/// The last `/`-separated segment of `object_url`.
///
/// A URL without `/` is its own id. A trailing `/` yields an empty id, as does
/// an empty input; both are valid results.
pub fn get_object_id(object_url: &str) -> &str {
    object_url
        .rsplit_once('/')
        .map_or(object_url, |(_, id)| id)
}

/// Rewrite every `"cabinets"` in `id` to `"folders"`.
///
/// The service lists cabinets as top level folders; callers that address both
/// through the folder endpoints use this to unify the path.
pub fn convert_cabinets_to_folders(id: &str) -> String {
    id.replace("cabinets", "folders")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_last_segment() {
        assert_eq!(get_object_id("https://host/repositories/123"), "123");
        assert_eq!(
            get_object_id("http://h/dctm-rest/repositories/REPO/objects/0b0000018000abcd"),
            "0b0000018000abcd"
        );
    }

    #[test]
    fn trailing_separator_gives_empty_id() {
        assert_eq!(get_object_id("https://host/repositories/123/"), "");
        assert_eq!(get_object_id("/"), "");
    }

    #[test]
    fn no_separator_gives_whole_input() {
        assert_eq!(get_object_id("noSlashesHere"), "noSlashesHere");
        assert_eq!(get_object_id(""), "");
    }

    #[test]
    fn id_extraction_leaves_cabinets_alone() {
        assert_eq!(get_object_id("http://h/repositories/r/cabinets"), "cabinets");
    }

    #[test]
    fn cabinets_become_folders_everywhere() {
        assert_eq!(
            convert_cabinets_to_folders("http://h/repositories/r/cabinets/0c01"),
            "http://h/repositories/r/folders/0c01"
        );
        assert_eq!(convert_cabinets_to_folders("cabinetscabinets"), "foldersfolders");
        assert_eq!(convert_cabinets_to_folders("cabinet"), "cabinet");
    }
}
