//! The composite widget's box tree.
//!
//! A single-line text control is a small fixed-shape tree of boxes:
//!
//! ```text
//! Control                      (the <input> border box)
//! ├── Container?               (decoration wrapper)
//! │   ├── InnerBlock?          (centering/flex wrapper)
//! │   │   └── InnerText        (the editable text box — always present)
//! │   └── SpinButton?          (trailing control)
//! └── Placeholder?             (overlay, excluded from normal flow)
//! ```
//!
//! The placeholder hangs directly off the control even though it overlays
//! the inner text box: its position is accumulated through every
//! intermediate frame after layout settles.
//!
//! Any of Container, InnerBlock, SpinButton, Placeholder may be absent; the
//! undecorated variant is just Control → InnerText. The tree uses arena
//! allocation with [`BoxId`] indices for all relationships, providing O(1)
//! access and traversal without borrow checker issues.
//!
//! Box nodes are created once, when the widget's shadow box tree is built,
//! and live until the widget is destroyed. Layout only ever mutates the
//! geometry and dirty flags of existing nodes.

use serde::Serialize;
use strum_macros::Display;
use thiserror::Error;

use crate::geometry::{BoxMetrics, EdgeSizes};

/// A type-safe index into the box tree.
///
/// Ids are minted by [`WidgetTreeBuilder`] and are only meaningful for the
/// tree that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BoxId(pub usize);

/// The fixed role a box plays in the composite widget.
///
/// A box's role never changes after construction; the tree holds at most one
/// box per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum BoxRole {
    /// The outermost box of the composite widget.
    Control,
    /// Optional decoration wrapper holding the inner block and side controls.
    Container,
    /// Optional centering/flex wrapper around the editable text box.
    InnerBlock,
    /// The editable text box. Always present.
    InnerText,
    /// Optional trailing spin control, placed at the container's trailing
    /// edge after layout.
    SpinButton,
    /// Optional placeholder overlay; sized and positioned after its siblings
    /// and excluded from normal flow.
    Placeholder,
}

/// One box in the widget tree.
///
/// Pure data plus accessors: geometry, dirty flags, and tree links. The
/// role and the links are fixed at construction; everything else is
/// recomputed by layout passes.
#[derive(Debug, Clone)]
pub struct BoxNode {
    role: BoxRole,
    parent: Option<BoxId>,
    children: Vec<BoxId>,

    /// Used geometry from the most recent layout pass.
    pub metrics: BoxMetrics,

    /// Dirty flag; set by mutation, cleared when the box's subtree layout
    /// completes.
    pub needs_layout: bool,

    /// Whether this box has completed at least one layout. First-layout
    /// boxes are skipped by the ambient repaint-scheduling policy and must
    /// request their own repaint.
    pub ever_had_layout: bool,

    /// Whether the box clips its overflowing contents. The composite widget
    /// manages its own control clip, so the style-change hook clears this
    /// on the control.
    pub overflow_clip: bool,
}

impl BoxNode {
    /// The fixed role of this box.
    #[must_use]
    pub const fn role(&self) -> BoxRole {
        self.role
    }

    /// The parent box, if any. Only the control has no parent.
    #[must_use]
    pub const fn parent(&self) -> Option<BoxId> {
        self.parent
    }
}

/// A structurally invalid widget tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Every widget has an editable text box; a tree without one cannot be
    /// laid out.
    #[error("widget tree must contain an inner text box")]
    MissingInnerText,

    /// The same role was added twice; the tree holds at most one box per
    /// role.
    #[error("duplicate {0} box in widget tree")]
    DuplicateRole(BoxRole),

    /// A decoration box (inner block or spin button) was added to an
    /// undecorated widget.
    #[error("{0} box requires a decoration container")]
    RequiresContainer(BoxRole),
}

/// Initial edge widths for one box, taken from its computed style when the
/// shadow tree is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxInit {
    /// Padding edge widths.
    pub padding: EdgeSizes,
    /// Border edge widths.
    pub border: EdgeSizes,
}

/// Builds a [`BoxTree`], validating the widget's structural invariants.
#[derive(Debug, Default)]
pub struct WidgetTreeBuilder {
    control: Option<BoxInit>,
    container: Option<BoxInit>,
    inner_block: Option<BoxInit>,
    inner_text: Option<BoxInit>,
    spin_button: Option<BoxInit>,
    placeholder: Option<BoxInit>,
}

impl WidgetTreeBuilder {
    /// Start building an empty widget tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the box for `role`.
    ///
    /// # Errors
    ///
    /// [`TreeError::DuplicateRole`] if the role was already added.
    pub fn set(&mut self, role: BoxRole, init: BoxInit) -> Result<(), TreeError> {
        let slot = match role {
            BoxRole::Control => &mut self.control,
            BoxRole::Container => &mut self.container,
            BoxRole::InnerBlock => &mut self.inner_block,
            BoxRole::InnerText => &mut self.inner_text,
            BoxRole::SpinButton => &mut self.spin_button,
            BoxRole::Placeholder => &mut self.placeholder,
        };
        if slot.is_some() {
            return Err(TreeError::DuplicateRole(role));
        }
        *slot = Some(init);
        Ok(())
    }

    /// Validate the collected boxes and produce the tree.
    ///
    /// The control is implied: if no [`BoxRole::Control`] init was added, a
    /// default (zero-edge) control is used.
    ///
    /// # Errors
    ///
    /// - [`TreeError::MissingInnerText`] if no inner text box was added.
    /// - [`TreeError::RequiresContainer`] if an inner block or spin button
    ///   was added without a container.
    pub fn finish(self) -> Result<BoxTree, TreeError> {
        let Some(inner_text_init) = self.inner_text else {
            return Err(TreeError::MissingInnerText);
        };
        if self.container.is_none() {
            if self.inner_block.is_some() {
                return Err(TreeError::RequiresContainer(BoxRole::InnerBlock));
            }
            if self.spin_button.is_some() {
                return Err(TreeError::RequiresContainer(BoxRole::SpinButton));
            }
        }

        let mut nodes = Vec::new();
        let control = push_node(
            &mut nodes,
            BoxRole::Control,
            self.control.unwrap_or_default(),
            None,
        );
        let container = self
            .container
            .map(|init| push_node(&mut nodes, BoxRole::Container, init, Some(control)));
        let inner_block = self
            .inner_block
            .map(|init| push_node(&mut nodes, BoxRole::InnerBlock, init, Some(container.expect("validated above"))));

        // The inner text lives under the innermost wrapper that exists; the
        // spin button is always a direct container child; the placeholder
        // overlay is always a direct control child.
        let text_parent = inner_block.or(container).unwrap_or(control);
        let inner_text = push_node(&mut nodes, BoxRole::InnerText, inner_text_init, Some(text_parent));
        let spin_button = self
            .spin_button
            .map(|init| push_node(&mut nodes, BoxRole::SpinButton, init, Some(container.expect("validated above"))));
        let placeholder = self
            .placeholder
            .map(|init| push_node(&mut nodes, BoxRole::Placeholder, init, Some(control)));

        Ok(BoxTree {
            nodes,
            control,
            container,
            inner_block,
            inner_text,
            spin_button,
            placeholder,
        })
    }
}

/// Append a node to the arena and link it to its parent.
fn push_node(
    nodes: &mut Vec<BoxNode>,
    role: BoxRole,
    init: BoxInit,
    parent: Option<BoxId>,
) -> BoxId {
    let id = BoxId(nodes.len());
    nodes.push(BoxNode {
        role,
        parent,
        children: Vec::new(),
        metrics: BoxMetrics {
            padding: init.padding,
            border: init.border,
            ..BoxMetrics::default()
        },
        needs_layout: true,
        ever_had_layout: false,
        overflow_clip: false,
    });
    if let Some(parent) = parent {
        nodes[parent.0].children.push(id);
    }
    id
}

/// The widget's box tree: an arena of [`BoxNode`]s plus cached ids for each
/// role, mirroring the widget's element accessors.
#[derive(Debug, Clone)]
pub struct BoxTree {
    nodes: Vec<BoxNode>,
    control: BoxId,
    container: Option<BoxId>,
    inner_block: Option<BoxId>,
    inner_text: BoxId,
    spin_button: Option<BoxId>,
    placeholder: Option<BoxId>,
}

impl BoxTree {
    /// The outermost control box.
    #[must_use]
    pub const fn control(&self) -> BoxId {
        self.control
    }

    /// The decoration container, if the widget is decorated.
    #[must_use]
    pub const fn container(&self) -> Option<BoxId> {
        self.container
    }

    /// The centering wrapper, if present.
    #[must_use]
    pub const fn inner_block(&self) -> Option<BoxId> {
        self.inner_block
    }

    /// The editable text box. Always present.
    #[must_use]
    pub const fn inner_text(&self) -> BoxId {
        self.inner_text
    }

    /// The trailing spin control, if present.
    #[must_use]
    pub const fn spin_button(&self) -> Option<BoxId> {
        self.spin_button
    }

    /// The placeholder overlay, if present.
    #[must_use]
    pub const fn placeholder(&self) -> Option<BoxId> {
        self.placeholder
    }

    /// The node for `id`, if `id` belongs to this tree.
    #[must_use]
    pub fn get(&self, id: BoxId) -> Option<&BoxNode> {
        self.nodes.get(id.0)
    }

    /// The node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not minted by this tree's builder.
    #[must_use]
    pub fn node(&self, id: BoxId) -> &BoxNode {
        &self.nodes[id.0]
    }

    /// Mutable access to the node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not minted by this tree's builder.
    pub fn node_mut(&mut self, id: BoxId) -> &mut BoxNode {
        &mut self.nodes[id.0]
    }

    /// The children of `id` in document order.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not minted by this tree's builder.
    #[must_use]
    pub fn children(&self, id: BoxId) -> &[BoxId] {
        &self.nodes[id.0].children
    }

    /// Whether `id` is `ancestor` itself or one of its descendants.
    ///
    /// # Panics
    ///
    /// Panics if either id was not minted by this tree's builder.
    #[must_use]
    pub fn is_inclusive_descendant_of(&self, id: BoxId, ancestor: BoxId) -> bool {
        let mut current = Some(id);
        while let Some(box_id) = current {
            if box_id == ancestor {
                return true;
            }
            current = self.nodes[box_id.0].parent;
        }
        false
    }

    /// Mark only `id` as needing layout, without propagating to ancestors.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not minted by this tree's builder.
    pub fn mark_needs_layout(&mut self, id: BoxId) {
        self.nodes[id.0].needs_layout = true;
    }

    /// Mark `start` and every ancestor strictly below `end` as needing
    /// layout. `end` itself is not marked.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `end` is not a proper ancestor of `start`.
    pub fn mark_needs_layout_between(&mut self, start: BoxId, end: BoxId) {
        debug_assert_ne!(start, end, "start must be strictly below end");
        let mut current = Some(start);
        while let Some(box_id) = current {
            if box_id == end {
                return;
            }
            self.nodes[box_id.0].needs_layout = true;
            current = self.nodes[box_id.0].parent;
        }
        debug_assert!(false, "end must be an ancestor of start");
    }

    /// Mark `id` and its whole containing chain, up to and including the
    /// control, as needing layout.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not minted by this tree's builder.
    pub fn mark_containing_chain(&mut self, id: BoxId) {
        let mut current = Some(id);
        while let Some(box_id) = current {
            self.nodes[box_id.0].needs_layout = true;
            current = self.nodes[box_id.0].parent;
        }
    }

    /// Whether `id` or any box in its subtree is marked as needing layout.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not minted by this tree's builder.
    #[must_use]
    pub fn subtree_needs_layout(&self, id: BoxId) -> bool {
        if self.nodes[id.0].needs_layout {
            return true;
        }
        self.nodes[id.0]
            .children
            .iter()
            .any(|&child| self.subtree_needs_layout(child))
    }
}
