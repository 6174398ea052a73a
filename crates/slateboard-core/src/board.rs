//! Board host: owns the item collection, selection, coords context and the
//! active tool, and routes pointer input.

use crate::coords::CoordsContext;
use crate::events::{BoardEvent, ChangeListener};
use crate::input::PointerEvent;
use crate::items::{Item, ItemId, ItemRecord};
use crate::providers::TextOverlay;
use crate::tools::{
    self, BrushTool, ClearTool, PanTool, PictureTool, PointerTool, ShapeTool, TextTool, Tool,
    ToolKind, ToolSwitch,
};
use kurbo::{Point, Size};
use std::collections::HashMap;
use std::time::Instant;
use thiserror::Error;

/// Board-level errors. Attachment problems are terminal-but-local: the
/// affected dispatch is dropped and logged while the rest of the board keeps
/// working.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("no tool attached for '{}'", .0.name())]
    ToolNotAttached(ToolKind),
}

/// Everything the tools operate on: the item collection, selection and hover
/// ids, the pending in-progress item, the coords context and the change
/// listeners. Tools receive `&mut BoardState` per call and never hold
/// references into the backing sequence; every mutation funnels through the
/// id-based API here so uniqueness and notifications stay uniform.
pub struct BoardState {
    /// Items, newest first. Painting walks this back-to-front so the newest
    /// items end up on top; hit-testing walks it front-to-back.
    items: Vec<Item>,
    selected: Option<ItemId>,
    hovered: Option<ItemId>,
    /// Single-slot, not-yet-committed item of the gesture in progress.
    pending: Option<Item>,
    coords: CoordsContext,
    viewport: Size,
    needs_redraw: bool,
    listeners: Vec<ChangeListener>,
    overlay: Option<Box<dyn TextOverlay>>,
}

impl BoardState {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            hovered: None,
            pending: None,
            coords: CoordsContext::new(),
            viewport: Size::new(800.0, 600.0),
            needs_redraw: true,
            listeners: Vec::new(),
            overlay: None,
        }
    }

    // ---- item collection -------------------------------------------------

    fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Prepend an item. Ids are unique within the collection; an item with a
    /// duplicate id is rejected and logged.
    pub fn add_item(&mut self, item: Item, notify: bool) -> bool {
        if self.position_of(item.id()).is_some() {
            log::warn!("item {} already on the board, ignoring add", item.id());
            return false;
        }
        let record = notify.then(|| ItemRecord::from_item(&item));
        self.items.insert(0, item);
        if let Some(record) = record {
            self.emit(BoardEvent::Add { item: record });
        }
        self.request_redraw();
        true
    }

    /// Remove an item, running its removal hook and clearing any matching
    /// selection or hover state.
    pub fn remove_item_by_id(&mut self, id: &ItemId, notify: bool) -> Option<Item> {
        let index = self.position_of(id)?;
        let item = self.items.remove(index);

        if let Item::Text(text) = &item {
            if text.editing {
                if let Some(overlay) = self.overlay.as_mut() {
                    overlay.hide(id);
                }
            }
        }
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        if self.hovered.as_ref() == Some(id) {
            self.hovered = None;
        }

        if notify {
            self.emit(BoardEvent::Remove { id: id.clone() });
        }
        self.request_redraw();
        Some(item)
    }

    /// Replace an item wholesale; the stored id is preserved.
    pub fn update_item_by_id(&mut self, id: &ItemId, mut item: Item, notify: bool) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };
        item.set_id(id.clone());
        self.items[index] = item;
        if notify {
            self.notify_item_update(id);
        }
        self.request_redraw();
        true
    }

    /// Partial update: a closure edits the item in place.
    pub fn mutate_item_by_id(
        &mut self,
        id: &ItemId,
        notify: bool,
        mutate: impl FnOnce(&mut Item),
    ) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };
        mutate(&mut self.items[index]);
        if notify {
            self.notify_item_update(id);
        }
        self.request_redraw();
        true
    }

    /// Emit an update notification for the item's current state. Tools call
    /// this once per completed gesture after a run of `notify = false`
    /// mutations.
    pub fn notify_item_update(&mut self, id: &ItemId) {
        if let Some(index) = self.position_of(id) {
            let record = ItemRecord::from_item(&self.items[index]);
            self.emit(BoardEvent::Update { item: record });
        }
    }

    pub fn get_item_by_id(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items in collection order, newest first.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Items in paint order, oldest first, so the newest paint on top.
    pub fn items_back_to_front(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().rev()
    }

    /// Topmost item whose bounding box contains the world point.
    pub fn item_at(&self, world: Point) -> Option<ItemId> {
        self.items
            .iter()
            .find(|item| item.bounds().is_some_and(|bounds| bounds.contains(world)))
            .map(|item| item.id().clone())
    }

    pub fn clear_items(&mut self, notify: bool) {
        for item in &self.items {
            if let Item::Text(text) = item {
                if text.editing {
                    if let Some(overlay) = self.overlay.as_mut() {
                        overlay.hide(&text.id);
                    }
                }
            }
        }
        self.items.clear();
        self.selected = None;
        self.hovered = None;
        if notify {
            self.emit(BoardEvent::Clear);
        }
        self.request_redraw();
    }

    // ---- selection and hover ---------------------------------------------

    pub fn selected_item_id(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    /// Change the selection. An item leaving selection has its text editing
    /// forced off.
    pub fn set_selected_item(&mut self, id: Option<ItemId>) {
        if self.selected == id {
            return;
        }
        if let Some(old) = self.selected.take() {
            self.force_end_editing(&old);
        }
        self.selected = id;
        self.request_redraw();
    }

    /// The selected item, when it has drawable bounds.
    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.as_ref().and_then(|id| self.get_item_by_id(id))
    }

    pub fn hovered_item_id(&self) -> Option<&ItemId> {
        self.hovered.as_ref()
    }

    pub fn set_hovered_item(&mut self, id: Option<ItemId>) {
        self.hovered = id;
    }

    /// Delete the selected item if its variant allows backspace removal.
    pub fn handle_backspace(&mut self, notify: bool) -> bool {
        let Some(id) = self.selected.clone() else {
            return false;
        };
        let removable = self
            .get_item_by_id(&id)
            .map(|item| item.removable_with_backspace())
            .unwrap_or(false);
        if !removable {
            return false;
        }
        self.remove_item_by_id(&id, notify).is_some()
    }

    // ---- text editing ----------------------------------------------------

    /// Enter edit mode for a text item and show the overlay editor at its
    /// canvas position.
    pub fn begin_text_editing(&mut self, id: &ItemId) {
        let mut shown: Option<(Point, String)> = None;
        if let Some(index) = self.position_of(id) {
            if let Item::Text(text) = &mut self.items[index] {
                text.editing = true;
                shown = Some((text.position(), text.content.clone()));
            }
        }
        if let Some((world, content)) = shown {
            let canvas = self.coords.to_canvas(world);
            if let Some(overlay) = self.overlay.as_mut() {
                overlay.show(id, canvas, &content);
            }
            self.request_redraw();
        }
    }

    /// Leave edit mode and hide the overlay.
    pub fn end_text_editing(&mut self, id: &ItemId) {
        self.force_end_editing(id);
    }

    fn force_end_editing(&mut self, id: &ItemId) {
        let mut was_editing = false;
        if let Some(index) = self.position_of(id) {
            if let Item::Text(text) = &mut self.items[index] {
                if text.editing {
                    text.editing = false;
                    was_editing = true;
                }
            }
        }
        if was_editing {
            if let Some(overlay) = self.overlay.as_mut() {
                overlay.hide(id);
            }
            self.request_redraw();
        }
    }

    /// Overlay-driven content sync for the text item being edited.
    pub fn set_text_content(&mut self, id: &ItemId, content: String, notify: bool) -> bool {
        self.mutate_item_by_id(id, notify, |item| {
            if let Item::Text(text) = item {
                text.set_content(content);
            }
        })
    }

    /// Install the overlay editor capability of the embedding UI.
    pub fn set_text_overlay(&mut self, overlay: Box<dyn TextOverlay>) {
        self.overlay = Some(overlay);
    }

    // ---- pending (in-progress) item --------------------------------------

    /// Put an item into the single pending slot, replacing any leftover.
    pub fn begin_pending(&mut self, item: Item) {
        self.pending = Some(item);
        self.request_redraw();
    }

    pub fn pending(&self) -> Option<&Item> {
        self.pending.as_ref()
    }

    pub fn pending_mut(&mut self) -> Option<&mut Item> {
        self.request_redraw();
        self.pending.as_mut()
    }

    pub fn take_pending(&mut self) -> Option<Item> {
        self.pending.take()
    }

    /// Drop the pending item without committing it (touch-cancel path).
    pub fn abort_pending(&mut self) {
        if self.pending.take().is_some() {
            self.request_redraw();
        }
    }

    // ---- coords and viewport ---------------------------------------------

    pub fn coords(&self) -> &CoordsContext {
        &self.coords
    }

    pub fn coords_mut(&mut self) -> &mut CoordsContext {
        self.request_redraw();
        &mut self.coords
    }

    pub fn to_canvas(&self, world: Point) -> Point {
        self.coords.to_canvas(world)
    }

    pub fn to_world(&self, canvas: Point) -> Point {
        self.coords.to_world(canvas)
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Resize the backing store; triggers a full redraw.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport = Size::new(width, height);
        self.request_redraw();
    }

    /// The tab/window became visible again; the backing store may be stale.
    pub fn visibility_regained(&mut self) {
        self.request_redraw();
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Whether a redraw is due; clears the flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // ---- notifications ---------------------------------------------------

    /// Subscribe to committed mutations.
    pub fn on_change(&mut self, listener: impl FnMut(&BoardEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: BoardEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    // ---- export / import -------------------------------------------------

    /// Snapshot the collection as `{id, type, data}` triples, in collection
    /// order.
    pub fn export_items(&self) -> Vec<ItemRecord> {
        self.items.iter().map(ItemRecord::from_item).collect()
    }

    /// Replace the collection with imported triples, restoring ids and
    /// order.
    pub fn import_items(&mut self, records: Vec<ItemRecord>) {
        self.items = records.into_iter().map(ItemRecord::into_item).collect();
        self.selected = None;
        self.hovered = None;
        self.request_redraw();
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.export_items())
    }

    pub fn from_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let records: Vec<ItemRecord> = serde_json::from_str(json)?;
        self.import_items(records);
        Ok(())
    }
}

/// The whiteboard host. Owns the [`BoardState`] plus the tool set, routes
/// pointer input to the active tool and manages tool switching with a
/// single-slot history.
pub struct Board {
    state: BoardState,
    tools: HashMap<ToolKind, Box<dyn Tool>>,
    active: ToolKind,
    previous: Option<ToolKind>,
    pointer_down: bool,
}

impl Board {
    /// The tool activated at startup and returned to by tools that hand
    /// control back.
    pub const DEFAULT_TOOL: ToolKind = ToolKind::Pointer;

    /// Create a board with the builtin tool set attached.
    pub fn new() -> Self {
        let mut board = Self {
            state: BoardState::new(),
            tools: HashMap::new(),
            active: Self::DEFAULT_TOOL,
            previous: None,
            pointer_down: false,
        };
        board.attach_tool(Box::new(PointerTool::new()));
        board.attach_tool(Box::new(PanTool::new()));
        board.attach_tool(Box::new(ShapeTool::rect()));
        board.attach_tool(Box::new(ShapeTool::circle()));
        board.attach_tool(Box::new(ShapeTool::line()));
        board.attach_tool(Box::new(BrushTool::pen()));
        board.attach_tool(Box::new(BrushTool::eraser()));
        board.attach_tool(Box::new(TextTool::new()));
        board.attach_tool(Box::new(PictureTool::new()));
        board.attach_tool(Box::new(ClearTool::new()));
        board
    }

    /// Register a tool. A duplicate registration is a configuration error:
    /// logged, and the late arrival stays inert.
    pub fn attach_tool(&mut self, tool: Box<dyn Tool>) {
        let kind = tool.kind();
        if self.tools.contains_key(&kind) {
            log::error!("tool '{}' already attached, ignoring duplicate", kind.name());
            return;
        }
        self.tools.insert(kind, tool);
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BoardState {
        &mut self.state
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active
    }

    /// Single-slot tool history (depth 1).
    pub fn previous_tool(&self) -> Option<ToolKind> {
        self.previous
    }

    pub fn default_tool(&self) -> ToolKind {
        Self::DEFAULT_TOOL
    }

    /// Activate a tool by kind, firing the unselect/select hooks and
    /// applying any hand-back the new tool requests.
    pub fn set_tool(&mut self, kind: ToolKind) {
        if kind == self.active {
            return;
        }
        if !self.tools.contains_key(&kind) {
            log::error!("{}", BoardError::ToolNotAttached(kind));
            return;
        }

        if let Some(mut old) = self.tools.remove(&self.active) {
            old.on_unselected(&mut self.state);
            self.tools.insert(old.kind(), old);
        }

        self.previous = Some(self.active);
        self.active = kind;

        let switch = match self.tools.remove(&kind) {
            Some(mut tool) => {
                let switch = tool.on_selected(&mut self.state);
                self.tools.insert(tool.kind(), tool);
                switch
            }
            None => ToolSwitch::None,
        };

        match switch {
            ToolSwitch::None => {}
            ToolSwitch::Previous => {
                if let Some(previous) = self.previous {
                    self.set_tool(previous);
                }
            }
            ToolSwitch::Default => self.set_tool(Self::DEFAULT_TOOL),
        }
    }

    /// Activate a tool by its registration name.
    pub fn set_tool_by_name(&mut self, name: &str) -> bool {
        match ToolKind::from_name(name) {
            Some(kind) => {
                self.set_tool(kind);
                true
            }
            None => false,
        }
    }

    /// Route a normalized pointer event to the active tool. Events with no
    /// matching gesture state are harmless no-ops.
    pub fn pointer_event(&mut self, event: PointerEvent) {
        let Some(mut tool) = self.tools.remove(&self.active) else {
            log::error!("{}", BoardError::ToolNotAttached(self.active));
            return;
        };

        match event {
            PointerEvent::Down { position } => {
                self.pointer_down = true;
                tool.handle_drawing_start(&mut self.state, position);
            }
            PointerEvent::Move { position } => {
                if self.pointer_down {
                    tool.handle_drawing_move(&mut self.state, position);
                } else {
                    tool.handle_hover_move(&mut self.state, position, Instant::now());
                }
            }
            PointerEvent::Up => {
                if self.pointer_down {
                    self.pointer_down = false;
                    tool.handle_drawing_end(&mut self.state);
                }
            }
            PointerEvent::Cancel => {
                self.pointer_down = false;
                self.state.abort_pending();
                tool.handle_gesture_cancel(&mut self.state);
            }
            PointerEvent::Hover { position } => {
                tool.handle_hover_move(&mut self.state, position, Instant::now());
            }
        }

        self.tools.insert(tool.kind(), tool);
    }

    /// Forward a color-swatch choice to the active tool.
    pub fn color_chosen(&mut self, color: crate::items::Rgba) {
        if let Some(tool) = self.tools.get_mut(&self.active) {
            tool.handle_color_chosen(color);
        }
    }

    /// Place user-picked image bytes on the board and return to the default
    /// tool.
    pub fn insert_picture(&mut self, bytes: &[u8]) -> ItemId {
        let id = tools::place_picture(&mut self.state, bytes);
        self.set_tool(Self::DEFAULT_TOOL);
        id
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Item, LineItem, RectItem, ShapeOptions};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn rect_item(x: f64, y: f64) -> Item {
        Item::Rect(RectItem::new(
            Point::new(x, y),
            10.0,
            10.0,
            ShapeOptions::default(),
        ))
    }

    #[test]
    fn test_items_are_prepended() {
        let mut board = Board::new();
        let a = rect_item(0.0, 0.0);
        let b = rect_item(5.0, 5.0);
        let (a_id, b_id) = (a.id().clone(), b.id().clone());

        board.state_mut().add_item(a, false);
        board.state_mut().add_item(b, false);

        let ids: Vec<_> = board.state().items().map(|item| item.id().clone()).collect();
        assert_eq!(ids, vec![b_id.clone(), a_id.clone()]);

        let paint_order: Vec<_> = board
            .state()
            .items_back_to_front()
            .map(|item| item.id().clone())
            .collect();
        assert_eq!(paint_order, vec![a_id, b_id]);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut board = Board::new();
        let item = rect_item(0.0, 0.0);
        let duplicate = item.clone();

        assert!(board.state_mut().add_item(item, false));
        assert!(!board.state_mut().add_item(duplicate, false));
        assert_eq!(board.state().items().count(), 1);
    }

    #[test]
    fn test_notifications_fire_per_mutation_kind() {
        let mut board = Board::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        board.state_mut().on_change(move |event| {
            let value = serde_json::to_value(event).unwrap();
            sink.borrow_mut().push(value["type"].as_str().unwrap().to_string());
        });

        let item = rect_item(0.0, 0.0);
        let id = item.id().clone();
        board.state_mut().add_item(item, true);
        board
            .state_mut()
            .mutate_item_by_id(&id, true, |_item| {});
        board.state_mut().remove_item_by_id(&id, true);
        board.state_mut().clear_items(true);

        assert_eq!(
            events.borrow().as_slice(),
            ["add", "update", "remove", "clear"]
        );
    }

    #[test]
    fn test_silent_mutations_do_not_notify() {
        let mut board = Board::new();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        board.state_mut().on_change(move |_| {
            *sink.borrow_mut() += 1;
        });

        let item = rect_item(0.0, 0.0);
        let id = item.id().clone();
        board.state_mut().add_item(item, false);
        board.state_mut().mutate_item_by_id(&id, false, |_item| {});
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_update_preserves_id() {
        let mut board = Board::new();
        let item = rect_item(0.0, 0.0);
        let id = item.id().clone();
        board.state_mut().add_item(item, false);

        let replacement = rect_item(99.0, 99.0);
        assert!(board.state_mut().update_item_by_id(&id, replacement, false));

        let stored = board.state().get_item_by_id(&id).unwrap();
        assert_eq!(stored.id(), &id);
        match stored {
            Item::Rect(rect) => assert!((rect.x - 99.0).abs() < f64::EPSILON),
            other => panic!("expected rect, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_export_import_roundtrip_keeps_ids_and_order() {
        let mut board = Board::new();
        board.state_mut().add_item(rect_item(0.0, 0.0), false);
        board.state_mut().add_item(
            Item::Line(LineItem::new(
                Point::ZERO,
                Point::new(10.0, 10.0),
                ShapeOptions::default(),
            )),
            false,
        );

        let json = board.state().to_json().unwrap();
        let exported = board.state().export_items();

        let mut restored = Board::new();
        restored.state_mut().from_json(&json).unwrap();
        let reimported = restored.state().export_items();

        let original: Vec<_> = exported.iter().map(|r| (&r.id, r.item.kind())).collect();
        let roundtripped: Vec<_> = reimported.iter().map(|r| (&r.id, r.item.kind())).collect();
        assert_eq!(original, roundtripped);
    }

    #[test]
    fn test_backspace_removes_selected_item() {
        let mut board = Board::new();
        let item = rect_item(0.0, 0.0);
        let id = item.id().clone();
        board.state_mut().add_item(item, false);
        board.state_mut().set_selected_item(Some(id.clone()));

        assert!(board.state_mut().handle_backspace(false));
        assert!(board.state().get_item_by_id(&id).is_none());
        assert_eq!(board.state().selected_item_id(), None);
    }

    #[test]
    fn test_redraw_requested_on_resize_and_visibility() {
        let mut board = Board::new();
        assert!(board.state_mut().take_redraw_request());
        assert!(!board.state_mut().take_redraw_request());

        board.state_mut().set_viewport_size(1024.0, 768.0);
        assert!(board.state_mut().take_redraw_request());

        board.state_mut().visibility_regained();
        assert!(board.state_mut().take_redraw_request());
    }

    #[test]
    fn test_set_tool_by_name() {
        let mut board = Board::new();
        assert!(board.set_tool_by_name("pen"));
        assert_eq!(board.active_tool(), ToolKind::Pen);
        assert!(!board.set_tool_by_name("lasso"));
        assert_eq!(board.active_tool(), ToolKind::Pen);
    }

    #[test]
    fn test_previous_tool_is_single_slot() {
        let mut board = Board::new();
        board.set_tool(ToolKind::Rect);
        assert_eq!(board.previous_tool(), Some(ToolKind::Pointer));
        board.set_tool(ToolKind::Pen);
        assert_eq!(board.previous_tool(), Some(ToolKind::Rect));
    }

    #[test]
    fn test_up_without_down_is_a_noop() {
        let mut board = Board::new();
        board.set_tool(ToolKind::Rect);
        board.pointer_event(PointerEvent::Up);
        board.pointer_event(PointerEvent::Move {
            position: Point::new(10.0, 10.0),
        });
        assert_eq!(board.state().items().count(), 0);
    }
}
