//! Recursive-descent readers over the catalog JSON schema
//!
//! The grammar is a top-level array of group objects, each holding an array
//! of sample entries, with playlist entries nesting exactly one level deep.
//! Field names are matched against a fixed dispatch table; anything outside
//! the table aborts the source.

use crate::error::{CatalogError, Result};
use crate::merger;
use chrono::DateTime;
use encore_core::{DrmInfo, PlaylistSample, Sample, SampleGroup, SampleInfo, UriSample};
use serde_json::{Map, Value};
use std::io::Read;

/// Parse one catalog source and merge its groups into `groups`.
///
/// Each group is handed to the merger as soon as it parses, so groups that
/// precede a failing element stay merged; the caller decides what to do
/// with the partial result.
pub fn parse_catalog(mut reader: impl Read, groups: &mut Vec<SampleGroup>) -> Result<()> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_catalog_str(&text, groups)
}

/// Parse catalog text already held in memory.
pub fn parse_catalog_str(text: &str, groups: &mut Vec<SampleGroup>) -> Result<()> {
    let root: Value = serde_json::from_str(text)?;
    let elements = root.as_array().ok_or_else(|| {
        CatalogError::InvalidStructure("top-level value must be an array of groups".to_string())
    })?;

    for element in elements {
        let group = parse_group(element)?;
        merger::merge_into(groups, group.title, group.concluded, group.samples);
    }
    Ok(())
}

/// One group as declared in a single source, before merging
#[derive(Debug)]
pub(crate) struct ParsedGroup {
    pub title: String,
    pub concluded: bool,
    pub samples: Vec<Sample>,
}

/// Read a group object: `name`, `concluded`, `samples`, `_comment`.
pub(crate) fn parse_group(value: &Value) -> Result<ParsedGroup> {
    let fields = as_object(value, "group")?;

    let mut title = String::new();
    let mut concluded = false;
    let mut samples = Vec::new();

    for (field, value) in fields {
        match field.as_str() {
            "name" => title = as_string(value, "name")?,
            "concluded" => concluded = as_bool(value, "concluded")?,
            "samples" => {
                for sample in as_array(value, "samples")? {
                    samples.push(parse_entry(sample, false)?);
                }
            }
            "_comment" => {
                as_string(value, "_comment")?; // Ignore.
            }
            other => return Err(CatalogError::UnsupportedField(other.to_string())),
        }
    }

    Ok(ParsedGroup {
        title,
        concluded,
        samples,
    })
}

/// Read one sample entry object.
///
/// `inside_playlist` marks the depth-one recursion into a `playlist` array;
/// DRM fields, `prefer_extension_decoders`, `abr_algorithm`, and `playlist`
/// itself are rejected at that depth.
pub(crate) fn parse_entry(value: &Value, inside_playlist: bool) -> Result<Sample> {
    let fields = as_object(value, "sample entry")?;

    let mut name = String::new();
    let mut uri = String::new();
    let mut editable = false;
    let mut extension = None;
    let mut start_date_time = None;
    let mut drm_scheme: Option<String> = None;
    let mut drm_license_url = None;
    let mut drm_key_request_properties = Vec::new();
    let mut drm_multi_session = false;
    let mut prefer_extension_decoders = false;
    let mut playlist: Option<Vec<UriSample>> = None;
    let mut ad_tag_uri = None;
    let mut abr_algorithm = None;

    for (field, value) in fields {
        match field.as_str() {
            "name" => name = as_string(value, "name")?,
            "uri" => uri = as_string(value, "uri")?,
            "editable" => editable = as_bool(value, "editable")?,
            "startDateTime" => {
                let text = as_string(value, "startDateTime")?;
                let parsed = DateTime::parse_from_rfc3339(&text)
                    .map_err(|_| CatalogError::DateParse(text.clone()))?;
                start_date_time = Some(parsed);
            }
            "extension" => extension = Some(as_string(value, "extension")?),
            "drm_scheme" => {
                reject_nested(inside_playlist, "drm_scheme")?;
                drm_scheme = Some(as_string(value, "drm_scheme")?);
            }
            "drm_license_url" => {
                reject_nested(inside_playlist, "drm_license_url")?;
                drm_license_url = Some(as_string(value, "drm_license_url")?);
            }
            "drm_key_request_properties" => {
                reject_nested(inside_playlist, "drm_key_request_properties")?;
                // Declaration order carries through to the request headers.
                for (key, value) in as_object(value, "drm_key_request_properties")? {
                    let header = as_string(value, "drm_key_request_properties")?;
                    drm_key_request_properties.push((key.clone(), header));
                }
            }
            "drm_multi_session" => drm_multi_session = as_bool(value, "drm_multi_session")?,
            "prefer_extension_decoders" => {
                reject_nested(inside_playlist, "prefer_extension_decoders")?;
                prefer_extension_decoders = as_bool(value, "prefer_extension_decoders")?;
            }
            "playlist" => {
                if inside_playlist {
                    return Err(CatalogError::InvalidNesting("playlist".to_string()));
                }
                let mut children = Vec::new();
                for child in as_array(value, "playlist")? {
                    match parse_entry(child, true)? {
                        Sample::Uri(child) => children.push(child),
                        // The recursive call rejects a nested `playlist`
                        // field, so it can only produce URI samples.
                        Sample::Playlist(_) => {
                            unreachable!("nested playlist rejected by inner call")
                        }
                    }
                }
                playlist = Some(children);
            }
            "ad_tag_uri" => ad_tag_uri = Some(as_string(value, "ad_tag_uri")?),
            "abr_algorithm" => {
                reject_nested(inside_playlist, "abr_algorithm")?;
                abr_algorithm = Some(as_string(value, "abr_algorithm")?);
            }
            other => return Err(CatalogError::UnsupportedField(other.to_string())),
        }
    }

    let drm = drm_scheme.map(|scheme| DrmInfo {
        scheme,
        license_url: drm_license_url,
        key_request_properties: drm_key_request_properties,
        multi_session: drm_multi_session,
    });

    let info = SampleInfo {
        name,
        prefer_extension_decoders,
        abr_algorithm,
        drm,
    };

    Ok(match playlist {
        Some(children) => Sample::Playlist(PlaylistSample { info, children }),
        None => Sample::Uri(UriSample {
            info,
            uri,
            editable,
            extension,
            start_date_time,
            ad_tag_uri,
        }),
    })
}

fn as_object<'a>(value: &'a Value, context: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| CatalogError::InvalidStructure(format!("expected an object for {context}")))
}

fn as_array<'a>(value: &'a Value, context: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| CatalogError::InvalidStructure(format!("expected an array for {context}")))
}

fn as_string(value: &Value, context: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| CatalogError::InvalidStructure(format!("expected a string for {context}")))
}

fn as_bool(value: &Value, context: &str) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| CatalogError::InvalidStructure(format!("expected a boolean for {context}")))
}

fn reject_nested(inside_playlist: bool, field: &str) -> Result<()> {
    if inside_playlist {
        return Err(CatalogError::InvalidNesting(field.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_defaults_apply_when_fields_absent() {
        let value = json!({ "name": "Bare", "uri": "https://example.com/a.mp4" });
        let sample = parse_entry(&value, false).unwrap();

        let Sample::Uri(sample) = sample else {
            panic!("expected a URI sample");
        };
        assert_eq!(sample.info.name, "Bare");
        assert!(!sample.editable);
        assert!(!sample.info.prefer_extension_decoders);
        assert_eq!(sample.extension, None);
        assert_eq!(sample.start_date_time, None);
        assert!(sample.info.drm.is_none());
    }

    #[test]
    fn drm_built_only_when_scheme_present() {
        // License URL without a scheme: no DrmInfo is assembled
        let value = json!({
            "name": "No scheme",
            "uri": "https://example.com/a.mpd",
            "drm_license_url": "https://license.example.com"
        });
        let sample = parse_entry(&value, false).unwrap();
        assert!(sample.info().drm.is_none());

        let value = json!({
            "name": "With scheme",
            "uri": "https://example.com/a.mpd",
            "drm_scheme": "widevine",
            "drm_license_url": "https://license.example.com",
            "drm_multi_session": true
        });
        let sample = parse_entry(&value, false).unwrap();
        let drm = sample.info().drm.as_ref().unwrap();
        assert_eq!(drm.scheme, "widevine");
        assert_eq!(drm.license_url.as_deref(), Some("https://license.example.com"));
        assert!(drm.multi_session);
    }

    #[test]
    fn drm_key_request_properties_preserve_declaration_order() {
        let value = json!({
            "name": "Headers",
            "uri": "https://example.com/a.mpd",
            "drm_scheme": "widevine",
            "drm_key_request_properties": { "a": "1", "b": "2" }
        });
        let sample = parse_entry(&value, false).unwrap();
        let drm = sample.info().drm.as_ref().unwrap();
        assert_eq!(
            drm.key_request_properties,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn unknown_field_is_rejected() {
        let value = json!({ "name": "Bad", "foo": 1 });
        let err = parse_entry(&value, false).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedField(field) if field == "foo"));
    }

    #[test]
    fn comment_is_not_legal_on_entries() {
        // Only group objects carry `_comment`
        let value = json!({ "name": "Bad", "_comment": "note" });
        let err = parse_entry(&value, false).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedField(field) if field == "_comment"));
    }

    #[test]
    fn drm_fields_rejected_inside_playlist() {
        for field in [
            "drm_scheme",
            "drm_license_url",
            "prefer_extension_decoders",
            "abr_algorithm",
        ] {
            let mut entry = serde_json::Map::new();
            entry.insert("name".to_string(), json!("Nested"));
            entry.insert(
                field.to_string(),
                if field == "prefer_extension_decoders" {
                    json!(true)
                } else {
                    json!("x")
                },
            );
            let err = parse_entry(&Value::Object(entry), true).unwrap_err();
            assert!(
                matches!(err, CatalogError::InvalidNesting(name) if name == field),
                "field {field} should be rejected on nested entries"
            );
        }
    }

    #[test]
    fn drm_key_request_properties_rejected_inside_playlist() {
        let value = json!({ "drm_key_request_properties": { "a": "1" } });
        let err = parse_entry(&value, true).unwrap_err();
        assert!(
            matches!(err, CatalogError::InvalidNesting(name) if name == "drm_key_request_properties")
        );
    }

    #[test]
    fn playlist_nesting_is_single_level() {
        let value = json!({
            "name": "Outer",
            "playlist": [
                { "name": "Inner", "playlist": [ { "uri": "https://example.com/x.mp4" } ] }
            ]
        });
        let err = parse_entry(&value, false).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidNesting(name) if name == "playlist"));
    }

    #[test]
    fn playlist_entry_collects_children_in_order() {
        let value = json!({
            "name": "Halves",
            "playlist": [
                { "name": "First half", "uri": "https://example.com/1.mpd" },
                { "name": "Second half", "uri": "https://example.com/2.mpd", "extension": "mpd" }
            ]
        });
        let sample = parse_entry(&value, false).unwrap();
        let Sample::Playlist(playlist) = sample else {
            panic!("expected a playlist sample");
        };
        assert_eq!(playlist.children.len(), 2);
        assert_eq!(playlist.children[0].info.name, "First half");
        assert_eq!(playlist.children[1].extension.as_deref(), Some("mpd"));
    }

    #[test]
    fn empty_playlist_is_not_rejected() {
        let value = json!({ "name": "Empty", "playlist": [] });
        let sample = parse_entry(&value, false).unwrap();
        assert!(matches!(sample, Sample::Playlist(playlist) if playlist.children.is_empty()));
    }

    #[test]
    fn start_date_time_parses_zoned_timestamps() {
        let value = json!({
            "name": "Kickoff",
            "uri": "https://example.com/live.mpd",
            "startDateTime": "2018-06-14T18:00:00+03:00"
        });
        let Sample::Uri(sample) = parse_entry(&value, false).unwrap() else {
            panic!("expected a URI sample");
        };
        let start = sample.start_date_time.unwrap();
        assert_eq!(start.timestamp(), 1_528_988_400);
    }

    #[test]
    fn malformed_start_date_time_is_a_date_error() {
        let value = json!({
            "name": "Bad date",
            "uri": "https://example.com/live.mpd",
            "startDateTime": "June 14th, 6pm"
        });
        let err = parse_entry(&value, false).unwrap_err();
        assert!(matches!(err, CatalogError::DateParse(text) if text == "June 14th, 6pm"));
    }

    #[test]
    fn group_defaults_and_comment() {
        let value = json!({ "_comment": "curated by ops" });
        let group = parse_group(&value).unwrap();
        assert_eq!(group.title, "");
        assert!(!group.concluded);
        assert!(group.samples.is_empty());
    }

    #[test]
    fn group_rejects_unknown_fields() {
        let value = json!({ "name": "G", "color": "red" });
        let err = parse_group(&value).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedField(field) if field == "color"));
    }

    #[test]
    fn top_level_must_be_an_array() {
        let mut groups = Vec::new();
        let err = parse_catalog_str("{}", &mut groups).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidStructure(_)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let mut groups = Vec::new();
        let err = parse_catalog_str("[{", &mut groups).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
