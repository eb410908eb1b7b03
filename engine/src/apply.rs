//! The substitution walk: inject bundle values into annotated nodes.

use crate::bundle::{Bundle, Lookup};
use crate::page::{Page, PageNode};

/// Substitute every annotated node on `page` from `bundle`.
///
/// Nodes are independent: a key that fails to resolve leaves that node
/// exactly as it was and logs a warning, then the walk continues. Nothing
/// propagates out of here.
pub fn translate_page<P: Page>(page: &P, bundle: &Bundle) {
    for node in page.annotated_nodes() {
        let key = node.key();
        match bundle.lookup(&key) {
            Lookup::Text(value) => {
                if node.wants_markup() {
                    node.set_markup(value);
                } else {
                    node.set_text(value);
                }
            }
            Lookup::Empty => {
                log::warn!("translation `{key}` is present but empty; node left untouched");
            }
            Lookup::Missing => {
                log::warn!("no translation for `{key}`; node left untouched");
            }
        }
    }
}
