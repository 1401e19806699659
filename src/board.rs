//! Project Board
//!
//! Wires the two lists together. Construction is two-phase: both lists are
//! built first, then each one's transfer handler is pointed at the other.

use std::rc::Rc;

use crate::error::{BoardError, Result};
use crate::models::Category;
use crate::page::Page;
use crate::project::{ProjectItem, ProjectList, Rejected, TransferHandler};

pub struct Board<P: Page> {
    active: ProjectList<P>,
    finished: ProjectList<P>,
}

impl<P: Page> Board<P> {
    pub fn init(page: Rc<P>) -> Result<Self> {
        let active = ProjectList::new(Category::Active, Rc::clone(&page))?;
        let finished = ProjectList::new(Category::Finished, page)?;

        active.set_transfer_handler(hand_off_to(&finished));
        finished.set_transfer_handler(hand_off_to(&active));

        log::info!("board ready: {} active, {} finished", active.len(), finished.len());
        Ok(Self { active, finished })
    }

    pub fn list(&self, category: Category) -> &ProjectList<P> {
        match category {
            Category::Active => &self.active,
            Category::Finished => &self.finished,
        }
    }
}

fn hand_off_to<P: Page>(target: &ProjectList<P>) -> TransferHandler<P> {
    let category = target.category();
    let target = target.downgrade();
    Rc::new(move |item: ProjectItem<P>| match target.upgrade() {
        Some(list) => list.add_project(item),
        None => Err(Rejected { error: BoardError::ListDropped(category), item }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::fake::FakePage;
    use crate::page::ItemButton;

    fn board(active: &[&str], finished: &[&str]) -> (Board<FakePage>, Rc<FakePage>) {
        let mut page = FakePage::new();
        for id in active {
            page = page.with_item(Category::Active, id, "info");
        }
        for id in finished {
            page = page.with_item(Category::Finished, id, "info");
        }
        let page = Rc::new(page);
        (Board::init(Rc::clone(&page)).unwrap(), page)
    }

    #[test]
    fn test_finishing_a_project() {
        let (board, page) = board(&["A", "B"], &[]);

        assert_eq!(page.click("A", ItemButton::Switch), 1);

        assert_eq!(board.list(Category::Active).project_ids(), vec!["B"]);
        assert_eq!(board.list(Category::Finished).project_ids(), vec!["A"]);
        assert_eq!(page.label("A", ItemButton::Switch).as_deref(), Some("Activate"));
        assert_eq!(page.rendered(Category::Finished), vec!["A"]);
    }

    #[test]
    fn test_switch_back_without_stale_handler() {
        let (board, page) = board(&["A", "B"], &[]);

        page.click("A", ItemButton::Switch);
        assert_eq!(page.binding_count("A", ItemButton::Switch), 1);

        assert_eq!(page.click("A", ItemButton::Switch), 1);
        assert_eq!(board.list(Category::Active).project_ids(), vec!["B", "A"]);
        assert!(board.list(Category::Finished).is_empty());
        assert_eq!(page.label("A", ItemButton::Switch).as_deref(), Some("Finish"));
    }

    #[test]
    fn test_label_flips_on_every_transfer() {
        let (_board, page) = board(&["A"], &[]);
        let mut expected = ["Activate", "Finish"].iter().cycle();

        for _ in 0..6 {
            page.click("A", ItemButton::Switch);
            assert_eq!(page.label("A", ItemButton::Switch).as_deref(), expected.next().copied());
        }
    }

    #[test]
    fn test_total_count_is_invariant() {
        let (board, page) = board(&["A", "B", "C"], &["D", "E"]);
        let total = |b: &Board<FakePage>| b.list(Category::Active).len() + b.list(Category::Finished).len();

        for id in ["A", "D", "B", "A", "E", "C", "D", "A"] {
            assert_eq!(page.click(id, ItemButton::Switch), 1);
            assert_eq!(total(&board), 5);
        }
        for id in ["A", "B", "C", "D", "E"] {
            let in_active = board.list(Category::Active).contains(id);
            let in_finished = board.list(Category::Finished).contains(id);
            assert!(in_active ^ in_finished, "{} must be in exactly one list", id);
        }
    }

    #[test]
    fn test_rendered_order_follows_list_order() {
        let (board, page) = board(&["A", "B"], &["C"]);

        page.click("B", ItemButton::Switch);
        page.click("C", ItemButton::Switch);
        page.click("A", ItemButton::Switch);

        for category in Category::ALL {
            assert_eq!(board.list(category).project_ids(), page.rendered(category));
        }
        assert_eq!(page.rendered(Category::Finished), vec!["B", "A"]);
        assert_eq!(page.rendered(Category::Active), vec!["C"]);
    }

    #[test]
    fn test_tooltip_guard_survives_transfer() {
        let (_board, page) = board(&["A"], &[]);

        page.click("A", ItemButton::Info);
        page.click("A", ItemButton::Switch);
        page.click("A", ItemButton::Info);
        assert_eq!(page.open_tooltips().len(), 1);

        page.click_tooltip("A");
        page.click("A", ItemButton::Info);
        assert_eq!(page.open_tooltips().len(), 1);
    }

    #[test]
    fn test_dropped_target_keeps_project_in_source() {
        let page = Rc::new(
            FakePage::new()
                .with_item(Category::Active, "A", "info")
                .with_item(Category::Active, "B", "info"),
        );
        let active = ProjectList::new(Category::Active, Rc::clone(&page)).unwrap();
        let finished = ProjectList::new(Category::Finished, Rc::clone(&page)).unwrap();
        active.set_transfer_handler(hand_off_to(&finished));
        drop(finished);

        let err = active.switch_project("A").unwrap_err();
        assert!(matches!(err, BoardError::ListDropped(Category::Finished)));
        assert_eq!(active.project_ids(), vec!["A", "B"]);
        assert_eq!(page.rendered(Category::Active), vec!["A", "B"]);
        assert_eq!(page.binding_count("A", ItemButton::Switch), 1);
    }
}
