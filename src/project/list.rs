//! Project List
//!
//! Ordered projects of one category. A list does not know its counterpart;
//! the board injects a transfer handler after both lists exist.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::item::{ProjectItem, TransferRequest};
use crate::error::{raise, BoardError, Result};
use crate::models::Category;
use crate::page::Page;

/// A hand-off the receiving list refused; the project goes back to its sender
pub struct Rejected<P: Page> {
    pub error: BoardError,
    pub item: ProjectItem<P>,
}

/// Receives a project leaving this list
pub type TransferHandler<P> = Rc<dyn Fn(ProjectItem<P>) -> std::result::Result<(), Rejected<P>>>;

struct ListState<P: Page> {
    category: Category,
    page: Rc<P>,
    projects: Vec<ProjectItem<P>>,
    transfer_handler: Option<TransferHandler<P>>,
}

pub struct ProjectList<P: Page> {
    inner: Rc<RefCell<ListState<P>>>,
}

impl<P: Page> Clone for ProjectList<P> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

/// Non-owning handle, used by callbacks that point back at a list
pub struct WeakProjectList<P: Page> {
    inner: Weak<RefCell<ListState<P>>>,
}

impl<P: Page> WeakProjectList<P> {
    pub fn upgrade(&self) -> Option<ProjectList<P>> {
        self.inner.upgrade().map(|inner| ProjectList { inner })
    }
}

impl<P: Page> ProjectList<P> {
    /// Wrap every project already rendered in `category`'s container
    pub fn new(category: Category, page: Rc<P>) -> Result<Self> {
        let list = Self {
            inner: Rc::new(RefCell::new(ListState {
                category,
                page: Rc::clone(&page),
                projects: Vec::new(),
                transfer_handler: None,
            })),
        };

        let ids = page.item_ids(category)?;
        let mut projects = Vec::with_capacity(ids.len());
        for id in ids {
            projects.push(ProjectItem::new(id, list.switch_request(), category, Rc::clone(&page))?);
        }
        log::debug!(
            "{} list: {:?}",
            category,
            projects.iter().map(|p| p.id()).collect::<Vec<_>>()
        );
        list.inner.borrow_mut().projects = projects;
        Ok(list)
    }

    pub fn downgrade(&self) -> WeakProjectList<P> {
        WeakProjectList { inner: Rc::downgrade(&self.inner) }
    }

    pub fn category(&self) -> Category {
        self.inner.borrow().category
    }

    pub fn project_ids(&self) -> Vec<String> {
        self.inner.borrow().projects.iter().map(|p| p.id().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.inner.borrow().projects.iter().any(|p| p.id() == item_id)
    }

    pub fn set_transfer_handler(&self, handler: TransferHandler<P>) {
        self.inner.borrow_mut().transfer_handler = Some(handler);
    }

    /// Take ownership of a project arriving from the other list.
    ///
    /// The switch button is rebound before the card moves, so a failure leaves
    /// the card where it was and hands the project back untouched in the DOM.
    pub fn add_project(&self, mut item: ProjectItem<P>) -> std::result::Result<(), Rejected<P>> {
        let (category, page) = {
            let state = self.inner.borrow();
            (state.category, Rc::clone(&state.page))
        };
        if let Err(error) = item.update(self.switch_request(), category) {
            return Err(Rejected { error, item });
        }
        if let Err(error) = page.relocate(item.id(), category) {
            return Err(Rejected { error, item });
        }
        log::info!("{} moved to {}", item.id(), category);
        self.inner.borrow_mut().projects.push(item);
        Ok(())
    }

    /// Hand the project off through the transfer handler and drop it from this list.
    /// A refused hand-off puts the project back at its old position.
    pub fn switch_project(&self, item_id: &str) -> Result<()> {
        let (index, item, handler) = {
            let mut state = self.inner.borrow_mut();
            let handler = state
                .transfer_handler
                .clone()
                .ok_or(BoardError::NoTransferHandler(state.category))?;
            let index = state
                .projects
                .iter()
                .position(|p| p.id() == item_id)
                .ok_or_else(|| BoardError::UnknownProject {
                    item: item_id.to_string(),
                    category: state.category,
                })?;
            (index, state.projects.remove(index), handler)
        };
        match handler(item) {
            Ok(()) => Ok(()),
            Err(Rejected { error, item }) => {
                self.restore(index, item);
                Err(error)
            }
        }
    }

    fn restore(&self, index: usize, item: ProjectItem<P>) {
        let request = self.switch_request();
        let mut state = self.inner.borrow_mut();
        let category = state.category;
        let index = index.min(state.projects.len());
        log::warn!("hand-off of {} refused, keeping it in {}", item.id(), category);
        state.projects.insert(index, item);
        if let Err(err) = state.projects[index].update(request, category) {
            log::error!("could not rebind {}: {}", state.projects[index].id(), err);
        }
    }

    /// Transfer request handed to items; holds the list weakly
    fn switch_request(&self) -> TransferRequest {
        let list = self.downgrade();
        Rc::new(move |item_id: &str| {
            let Some(list) = list.upgrade() else {
                log::warn!("switch on {} after its list was dropped", item_id);
                return;
            };
            if let Err(err) = list.switch_project(item_id) {
                raise(err);
            }
        })
    }
}
