//! Commons file-description page for each record.

use std::fmt::Write;

use crate::categories::CategoryLookup;
use crate::record::ImageRecord;

/// License template the Commons upload relies on.
pub const LICENSE_TEMPLATE: &str = "{{Banco de imagens da Câmara dos Deputados}}";

/// `{{Information}}` block, license header and one category per deputy plus
/// their state and party. Categories that resolve to nothing are left out.
pub fn render_wikitext(record: &ImageRecord, lookup: &CategoryLookup) -> String {
    let mut text = format!(
        "=={{{{int:filedesc}}}}==\n\
         {{{{Information\n\
         |description={{{{pt-br|1={alt}}}}}\n\
         |date={date}\n\
         |source={source}\n\
         |author={author}\n\
         |permission=\n\
         |other versions=\n\
         }}}}\n\
         \n\
         =={{{{int:license-header}}}}==\n\
         \n\
         {license}\n",
        alt = record.alt_text,
        date = record.date,
        source = record.source,
        author = record.author.as_deref().unwrap_or(""),
        license = LICENSE_TEMPLATE,
    );

    if let Some(congressmen) = &record.congressmen {
        for (name, affiliation) in congressmen.iter() {
            for category in [
                name,
                lookup.state_category(&affiliation.state),
                lookup.party_category(&affiliation.party),
            ] {
                if !category.is_empty() {
                    let _ = writeln!(text, "[[Category:{}]]", category);
                }
            }
        }
    }
    text
}
