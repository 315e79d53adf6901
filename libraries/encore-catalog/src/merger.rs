//! Title-based group merging across catalog sources

use encore_core::{Sample, SampleGroup};

/// Merge one parsed group into the working list.
///
/// Group identity is title equality, the empty title included. Samples are
/// appended in declaration order; a title seen for the first time goes to
/// the end of the list, so the final order is first-seen order across all
/// sources. `concluded` keeps its first-seen value: the field models a
/// declaration default, not an update.
pub(crate) fn merge_into(
    groups: &mut Vec<SampleGroup>,
    title: String,
    concluded: bool,
    new_samples: Vec<Sample>,
) {
    match groups.iter_mut().find(|group| group.title == title) {
        Some(group) => group.samples.extend(new_samples),
        None => {
            let mut group = SampleGroup::new(title, concluded);
            group.samples = new_samples;
            groups.push(group);
        }
    }
}
