// SPDX-License-Identifier: MPL-2.0
//! Gallery state store.
//!
//! [`GalleryStore`] is the single owner of the image collection and of every
//! view derived from it. Each mutation updates the base state and then
//! rebuilds `filtered_images` and `favorites` in full, so the derived views
//! never drift from `images` and the active filters.

use crate::diagnostics::{BufferCapacity, DiagnosticsCollector, UserAction};
use crate::domain::gallery::{
    apply_filters_and_sorting, FiltersPatch, GalleryFilters, Image, ImageDraft, ImageId,
    ImagePatch, ImageStats, ViewHistory,
};
use crate::domain::ui::ModalZoom;
use crate::gallery::catalog;
use crate::gallery::generator::{ImageSource, PicsumGenerator};
use crate::gallery::snapshot::GallerySnapshot;

/// Message stored on a failed fetch when the source gives no reason.
pub const LOAD_ERROR_FALLBACK: &str = "Failed to load images";

/// Owner of the gallery state.
///
/// # Example
///
/// ```
/// use gallery_lens::gallery::{GalleryStore, PicsumGenerator};
/// use gallery_lens::domain::gallery::FiltersPatch;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut store = GalleryStore::new(PicsumGenerator::seeded(1));
/// store.fetch_images(12).await;
/// assert_eq!(store.images().len(), 12);
///
/// store.update_filters(FiltersPatch::new().category("Natureza"));
/// assert!(store
///     .filtered_images()
///     .iter()
///     .all(|image| image.category == "Natureza"));
/// # });
/// ```
#[derive(Debug)]
pub struct GalleryStore<S: ImageSource = PicsumGenerator> {
    source: S,
    images: Vec<Image>,
    filtered_images: Vec<Image>,
    favorites: Vec<Image>,
    history: ViewHistory,
    filters: GalleryFilters,
    loading: bool,
    error: Option<String>,
    selected_image: Option<Image>,
    modal_open: bool,
    zoom: ModalZoom,
    diagnostics: DiagnosticsCollector,
}

impl Default for GalleryStore<PicsumGenerator> {
    fn default() -> Self {
        Self::new(PicsumGenerator::default())
    }
}

impl<S: ImageSource> GalleryStore<S> {
    /// Creates an empty store backed by `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_capacity(source, BufferCapacity::default())
    }

    /// Creates an empty store whose diagnostics keep at most `capacity` events.
    #[must_use]
    pub fn with_capacity(source: S, capacity: BufferCapacity) -> Self {
        Self {
            source,
            images: Vec::new(),
            filtered_images: Vec::new(),
            favorites: Vec::new(),
            history: ViewHistory::new(),
            filters: GalleryFilters::default(),
            loading: false,
            error: None,
            selected_image: None,
            modal_open: false,
            zoom: ModalZoom::default(),
            diagnostics: DiagnosticsCollector::new(capacity),
        }
    }

    /// Creates a store from previously persisted state.
    #[must_use]
    pub fn from_snapshot(source: S, snapshot: GallerySnapshot, capacity: BufferCapacity) -> Self {
        let mut store = Self::with_capacity(source, capacity);
        store.restore_snapshot(snapshot);
        store
    }

    /// Replaces images, favorites and history with the snapshot contents.
    ///
    /// Filters go back to their defaults. Favorites are rebuilt from the
    /// images' `is_favorite` flags rather than trusted from the snapshot.
    pub fn restore_snapshot(&mut self, snapshot: GallerySnapshot) {
        let GallerySnapshot {
            images,
            favorites,
            history,
        } = snapshot;

        self.images = images;
        self.history = history;
        self.filters = GalleryFilters::default();
        self.refresh_derived();

        let stored: Vec<ImageId> = favorites.iter().map(|img| img.id).collect();
        let derived: Vec<ImageId> = self.favorites.iter().map(|img| img.id).collect();
        if stored != derived {
            tracing::warn!(
                stored = stored.len(),
                derived = derived.len(),
                "snapshot favorites disagree with image flags, using image flags"
            );
            self.diagnostics
                .log_warning("snapshot favorites rebuilt from image flags");
        }

        tracing::debug!(
            images = self.images.len(),
            history = self.history.len(),
            "gallery restored from snapshot"
        );
    }

    /// Captures the persisted part of the state.
    #[must_use]
    pub fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            images: self.images.clone(),
            favorites: self.favorites.clone(),
            history: self.history.clone(),
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Replaces the collection with `count` freshly generated images.
    ///
    /// On failure the previous collection is kept and the message is stored
    /// in [`error`](Self::error).
    pub async fn fetch_images(&mut self, count: usize) {
        self.loading = true;
        self.error = None;
        tracing::debug!(count, "fetching images");

        match self.source.generate_batch(count) {
            Ok(images) => {
                self.images = images;
                self.refresh_derived();
                self.diagnostics
                    .log_action(UserAction::FetchImages { count: self.images.len() });
                tracing::info!(count = self.images.len(), "images loaded");
            }
            Err(err) => {
                let message = if err.message().is_empty() {
                    LOAD_ERROR_FALLBACK.to_string()
                } else {
                    err.message().to_string()
                };
                tracing::warn!(error = %message, "image fetch failed");
                self.diagnostics.log_error(message.clone());
                self.error = Some(message);
            }
        }

        self.loading = false;
    }

    // =========================================================================
    // Selection and detail view
    // =========================================================================

    /// Opens the detail view on `image` and counts one view.
    ///
    /// The increment is applied to the stored copy, so a stale `image` still
    /// produces exactly one extra view. The updated copy is what ends up in
    /// the selection and at the front of the history.
    pub fn set_selected_image(&mut self, image: &Image) {
        let viewed = match self.images.iter_mut().find(|stored| stored.id == image.id) {
            Some(stored) => {
                stored.views = stored.views.saturating_add(1);
                stored.clone()
            }
            None => {
                tracing::debug!(id = %image.id, "selected image is not in the collection");
                image.clone()
            }
        };

        self.history.push(viewed.clone());
        self.selected_image = Some(viewed);
        self.modal_open = true;
        self.zoom = ModalZoom::default();
        self.refresh_derived();
        self.diagnostics.log_action(UserAction::SelectImage {
            id: image.id.value(),
        });
    }

    /// Closes the detail view. Images are untouched.
    pub fn close_modal(&mut self) {
        self.selected_image = None;
        self.modal_open = false;
        self.zoom = ModalZoom::default();
        self.diagnostics.log_action(UserAction::CloseModal);
    }

    pub fn zoom_in(&mut self) {
        if self.modal_open {
            self.zoom = self.zoom.zoom_in();
            self.diagnostics.log_action(UserAction::ZoomIn);
        }
    }

    pub fn zoom_out(&mut self) {
        if self.modal_open {
            self.zoom = self.zoom.zoom_out();
            self.diagnostics.log_action(UserAction::ZoomOut);
        }
    }

    pub fn reset_zoom(&mut self) {
        if self.modal_open {
            self.zoom = ModalZoom::default();
            self.diagnostics.log_action(UserAction::ResetZoom);
        }
    }

    // =========================================================================
    // Favorites and history
    // =========================================================================

    /// Flips the favorite flag and moves `likes` by one in the same direction.
    ///
    /// Returns `false` for an unknown id.
    pub fn toggle_favorite(&mut self, id: ImageId) -> bool {
        let Some(image) = self.images.iter_mut().find(|img| img.id == id) else {
            tracing::debug!(%id, "toggle_favorite on unknown image");
            return false;
        };

        image.is_favorite = !image.is_favorite;
        image.likes += if image.is_favorite { 1 } else { -1 };
        self.refresh_derived();
        self.diagnostics
            .log_action(UserAction::ToggleFavorite { id: id.value() });
        true
    }

    /// Records a view in the history without selecting or counting it.
    pub fn add_to_history(&mut self, image: &Image) {
        self.history.push(image.clone());
        self.diagnostics.log_action(UserAction::AddToHistory {
            id: image.id.value(),
        });
    }

    // =========================================================================
    // Filters
    // =========================================================================

    pub fn update_filters(&mut self, patch: FiltersPatch) {
        self.filters.apply(patch);
        self.refresh_derived();
        self.diagnostics.log_action(UserAction::UpdateFilters {
            active_filters: self.filters.active_count(),
            sort_by: self.filters.sort_by.to_string(),
        });
    }

    /// Resets every filter.
    ///
    /// The visible list becomes the collection in its current order; the
    /// default sort is not reapplied until the next derivation.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.filtered_images = self.images.clone();
        self.diagnostics.log_action(UserAction::ClearFilters);
    }

    pub fn search_images(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.filters
            .apply(FiltersPatch::new().search_query(query.clone()));
        self.refresh_derived();
        self.diagnostics
            .log_action(UserAction::SearchImages { query });
    }

    /// Drops one tag from the tag filter.
    pub fn remove_tag_filter(&mut self, tag: &str) {
        self.filters.tags.retain(|active| active != tag);
        self.refresh_derived();
        self.diagnostics.log_action(UserAction::RemoveTagFilter {
            tag: tag.to_string(),
        });
    }

    // =========================================================================
    // Collection edits
    // =========================================================================

    /// Inserts a new image at the front and returns its id.
    ///
    /// The id is one more than the largest id in the collection, or
    /// [`ImageId::FIRST`] when the collection is empty.
    pub fn add_image(&mut self, draft: ImageDraft) -> ImageId {
        let id = self
            .images
            .iter()
            .map(|img| img.id)
            .max()
            .map_or(ImageId::FIRST, ImageId::next);

        self.images.insert(0, Image::from_draft(id, draft));
        self.refresh_derived();
        self.diagnostics
            .log_action(UserAction::AddImage { id: id.value() });
        tracing::debug!(%id, "image added");
        id
    }

    /// Removes an image. Returns `false` for an unknown id.
    ///
    /// Deleting the image shown in the detail view closes it.
    pub fn delete_image(&mut self, id: ImageId) -> bool {
        let before = self.images.len();
        self.images.retain(|img| img.id != id);
        if self.images.len() == before {
            return false;
        }

        if self.selected_image.as_ref().is_some_and(|img| img.id == id) {
            self.selected_image = None;
            self.modal_open = false;
            self.zoom = ModalZoom::default();
        }
        self.refresh_derived();
        self.diagnostics
            .log_action(UserAction::DeleteImage { id: id.value() });
        true
    }

    /// Merges `patch` into an image. Returns `false` for an unknown id.
    pub fn update_image(&mut self, id: ImageId, patch: &ImagePatch) -> bool {
        let Some(image) = self.images.iter_mut().find(|img| img.id == id) else {
            return false;
        };

        *image = patch.applied_to(image);
        self.refresh_derived();
        self.diagnostics
            .log_action(UserAction::UpdateImage { id: id.value() });
        true
    }

    // =========================================================================
    // Reads
    // =========================================================================

    #[must_use]
    pub fn image_stats(&self) -> ImageStats {
        ImageStats::collect(&self.images, &self.favorites)
    }

    #[must_use]
    pub fn image(&self, id: ImageId) -> Option<&Image> {
        self.images.iter().find(|img| img.id == id)
    }

    #[must_use]
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    #[must_use]
    pub fn filtered_images(&self) -> &[Image] {
        &self.filtered_images
    }

    #[must_use]
    pub fn favorites(&self) -> &[Image] {
        &self.favorites
    }

    #[must_use]
    pub fn history(&self) -> &ViewHistory {
        &self.history
    }

    #[must_use]
    pub fn filters(&self) -> &GalleryFilters {
        &self.filters
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed fetch, cleared when the next fetch starts.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&Image> {
        self.selected_image.as_ref()
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    #[must_use]
    pub fn zoom(&self) -> ModalZoom {
        self.zoom
    }

    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        catalog::categories()
    }

    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        catalog::tags()
    }

    /// Whether any narrowing filter is set. Sort order does not count.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.filters.is_active()
    }

    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Records a warning raised outside the store, such as a settings or
    /// snapshot problem at startup.
    pub fn record_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "gallery warning");
        self.diagnostics.log_warning(message);
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    fn refresh_derived(&mut self) {
        self.favorites = self
            .images
            .iter()
            .filter(|img| img.is_favorite)
            .cloned()
            .collect();
        self.filtered_images = apply_filters_and_sorting(&self.images, &self.filters);

        if let Some(selected) = self.selected_image.as_mut() {
            if let Some(stored) = self.images.iter().find(|img| img.id == selected.id) {
                selected.clone_from(stored);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{SortBy, HISTORY_LIMIT};
    use crate::error::{Error, Result};
    use crate::gallery::UploadForm;
    use crate::test_utils::image;

    fn ids(images: &[Image]) -> Vec<u64> {
        images.iter().map(|img| img.id.value()).collect()
    }

    fn store_with(images: Vec<Image>) -> GalleryStore {
        GalleryStore::from_snapshot(
            PicsumGenerator::seeded(0),
            GallerySnapshot {
                images,
                ..GallerySnapshot::default()
            },
            BufferCapacity::default(),
        )
    }

    fn two_images() -> Vec<Image> {
        vec![
            image(1, "Nature", &["a"], 5, 2),
            image(2, "City", &["b"], 9, 1),
        ]
    }

    /// Source that succeeds until told to fail.
    struct ToggleSource {
        inner: PicsumGenerator,
        failure: Option<String>,
    }

    impl ImageSource for ToggleSource {
        fn generate(&mut self, id: ImageId) -> Result<Image> {
            match &self.failure {
                Some(message) => Err(Error::Load(message.clone())),
                None => self.inner.generate(id),
            }
        }
    }

    fn toggle_store() -> GalleryStore<ToggleSource> {
        GalleryStore::new(ToggleSource {
            inner: PicsumGenerator::seeded(5),
            failure: None,
        })
    }

    #[tokio::test]
    async fn fetch_replaces_collection_and_derives_views() {
        let mut store = GalleryStore::new(PicsumGenerator::seeded(11));
        store.fetch_images(12).await;

        assert_eq!(store.images().len(), 12);
        assert_eq!(store.filtered_images().len(), 12);
        assert!(store.favorites().is_empty());
        assert!(!store.is_loading());
        assert!(store.error().is_none());

        let newest_first = store
            .filtered_images()
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at);
        assert!(newest_first);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_images_and_reports_message() {
        let mut store = toggle_store();
        store.fetch_images(3).await;
        let before = store.images().to_vec();

        store.source_mut().failure = Some("network down".to_string());
        store.fetch_images(5).await;

        assert_eq!(store.images(), before.as_slice());
        assert_eq!(store.error(), Some("network down"));
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn failed_fetch_without_message_uses_fallback() {
        let mut store = toggle_store();
        store.source_mut().failure = Some(String::new());
        store.fetch_images(2).await;

        assert_eq!(store.error(), Some(LOAD_ERROR_FALLBACK));
        assert!(store.images().is_empty());
    }

    #[tokio::test]
    async fn next_fetch_clears_previous_error() {
        let mut store = toggle_store();
        store.source_mut().failure = Some("boom".to_string());
        store.fetch_images(2).await;
        assert!(store.error().is_some());

        store.source_mut().failure = None;
        store.fetch_images(2).await;
        assert!(store.error().is_none());
        assert_eq!(store.images().len(), 2);
    }

    #[test]
    fn category_filter_then_popular_sort() {
        let mut store = store_with(two_images());

        store.update_filters(FiltersPatch::new().category("Nature"));
        assert_eq!(ids(store.filtered_images()), vec![1]);

        store.update_filters(FiltersPatch::new().category("").sort_by(SortBy::Popular));
        assert_eq!(ids(store.filtered_images()), vec![2, 1]);
    }

    #[test]
    fn add_image_assigns_sequential_ids() {
        let mut store = store_with(Vec::new());

        let first = store.add_image(UploadForm::default().into_draft());
        let second = store.add_image(UploadForm::default().into_draft());
        assert_eq!(first, ImageId::new(1));
        assert_eq!(second, ImageId::new(2));
        assert_eq!(ids(store.images()), vec![2, 1]);

        assert!(store.delete_image(first));
        assert_eq!(ids(store.images()), vec![2]);
    }

    #[test]
    fn add_image_uses_max_id_not_length() {
        let mut store = store_with(vec![image(7, "A", &[], 0, 0), image(3, "A", &[], 0, 0)]);
        let id = store.add_image(UploadForm::default().into_draft());
        assert_eq!(id, ImageId::new(8));
    }

    #[test]
    fn add_then_delete_restores_images() {
        let mut store = store_with(two_images());
        let before = store.images().to_vec();

        let id = store.add_image(UploadForm::default().into_draft());
        store.delete_image(id);

        assert_eq!(store.images(), before.as_slice());
    }

    #[test]
    fn toggle_favorite_moves_likes() {
        let mut store = store_with(two_images());

        assert!(store.toggle_favorite(ImageId::new(2)));
        let img = store.image(ImageId::new(2)).unwrap();
        assert!(img.is_favorite);
        assert_eq!(img.likes, 2);
        assert_eq!(ids(store.favorites()), vec![2]);

        store.toggle_favorite(ImageId::new(2));
        let img = store.image(ImageId::new(2)).unwrap();
        assert!(!img.is_favorite);
        assert_eq!(img.likes, 1);
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn unfavoriting_can_drive_likes_negative() {
        let mut favorite = image(1, "A", &[], 0, 0);
        favorite.is_favorite = true;
        let mut store = store_with(vec![favorite]);

        store.toggle_favorite(ImageId::new(1));
        assert_eq!(store.image(ImageId::new(1)).unwrap().likes, -1);
    }

    #[test]
    fn toggle_favorite_unknown_id_is_noop() {
        let mut store = store_with(two_images());
        let before = store.images().to_vec();

        assert!(!store.toggle_favorite(ImageId::new(99)));
        assert_eq!(store.images(), before.as_slice());
    }

    #[test]
    fn selecting_counts_one_view_and_records_history() {
        let mut store = store_with(two_images());
        let stale = store.image(ImageId::new(1)).unwrap().clone();

        store.set_selected_image(&stale);
        store.close_modal();
        store.set_selected_image(&stale);

        let stored = store.image(ImageId::new(1)).unwrap();
        assert_eq!(stored.views, 7);
        assert_eq!(store.selected_image().unwrap().views, 7);
        assert!(store.is_modal_open());
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.history().latest().unwrap().views, 7);
    }

    #[test]
    fn reselecting_moves_image_to_front_of_history() {
        let mut store = store_with(two_images());
        let first = store.image(ImageId::new(1)).unwrap().clone();
        let second = store.image(ImageId::new(2)).unwrap().clone();

        store.set_selected_image(&first);
        store.set_selected_image(&second);
        store.set_selected_image(&first);

        assert_eq!(ids(store.history().as_slice()), vec![1, 2]);
    }

    #[test]
    fn history_is_bounded() {
        let images: Vec<Image> = (1..=15).map(|id| image(id, "A", &[], 0, 0)).collect();
        let mut store = store_with(images.clone());

        for img in &images {
            store.set_selected_image(img);
        }

        assert_eq!(store.history().len(), HISTORY_LIMIT);
        assert_eq!(store.history().latest().unwrap().id, ImageId::new(15));
    }

    #[test]
    fn selecting_unknown_image_still_opens_detail_view() {
        let mut store = store_with(two_images());
        let outsider = image(42, "A", &[], 3, 0);

        store.set_selected_image(&outsider);

        assert_eq!(store.selected_image().unwrap().id, ImageId::new(42));
        assert!(store.history().contains(ImageId::new(42)));
        assert_eq!(store.images().len(), 2);
    }

    #[test]
    fn close_modal_resets_detail_state_only() {
        let mut store = store_with(two_images());
        let img = store.image(ImageId::new(1)).unwrap().clone();
        store.set_selected_image(&img);
        store.zoom_in();

        store.close_modal();

        assert!(store.selected_image().is_none());
        assert!(!store.is_modal_open());
        assert_eq!(store.zoom(), ModalZoom::default());
        assert_eq!(store.images().len(), 2);
    }

    #[test]
    fn zoom_only_applies_while_detail_view_is_open() {
        let mut store = store_with(two_images());
        store.zoom_in();
        assert_eq!(store.zoom(), ModalZoom::default());

        let img = store.image(ImageId::new(1)).unwrap().clone();
        store.set_selected_image(&img);
        store.zoom_in();
        store.zoom_in();
        assert_eq!(store.zoom().value(), 150.0);

        store.zoom_out();
        assert_eq!(store.zoom().value(), 125.0);

        store.reset_zoom();
        assert_eq!(store.zoom(), ModalZoom::default());
    }

    #[test]
    fn selecting_resets_zoom() {
        let mut store = store_with(two_images());
        let img = store.image(ImageId::new(1)).unwrap().clone();
        store.set_selected_image(&img);
        store.zoom_in();

        store.set_selected_image(&img);
        assert_eq!(store.zoom(), ModalZoom::default());
    }

    #[test]
    fn deleting_selected_image_closes_detail_view() {
        let mut store = store_with(two_images());
        let img = store.image(ImageId::new(2)).unwrap().clone();
        store.set_selected_image(&img);

        store.delete_image(ImageId::new(2));

        assert!(store.selected_image().is_none());
        assert!(!store.is_modal_open());
        assert_eq!(ids(store.filtered_images()), vec![1]);
    }

    #[test]
    fn delete_removes_from_favorites() {
        let mut store = store_with(two_images());
        store.toggle_favorite(ImageId::new(1));

        store.delete_image(ImageId::new(1));

        assert!(store.favorites().is_empty());
        assert!(!store.delete_image(ImageId::new(1)));
    }

    #[test]
    fn update_image_merges_patch_and_rederives() {
        let mut store = store_with(two_images());
        store.update_filters(FiltersPatch::new().category("City"));
        assert_eq!(ids(store.filtered_images()), vec![2]);

        let patch = ImagePatch {
            category: Some("City".to_string()),
            author: Some("Ana".to_string()),
            ..ImagePatch::default()
        };
        assert!(store.update_image(ImageId::new(1), &patch));

        let updated = store.image(ImageId::new(1)).unwrap();
        assert_eq!(updated.author, "Ana");
        assert_eq!(updated.views, 5);
        assert_eq!(ids(store.filtered_images()), vec![2, 1]);
        assert!(!store.update_image(ImageId::new(9), &patch));
    }

    #[test]
    fn update_image_marking_favorite_updates_favorites() {
        let mut store = store_with(two_images());
        let patch = ImagePatch {
            is_favorite: Some(true),
            ..ImagePatch::default()
        };
        store.update_image(ImageId::new(2), &patch);
        assert_eq!(ids(store.favorites()), vec![2]);
    }

    #[test]
    fn clear_filters_keeps_collection_order() {
        let mut store = store_with(two_images());
        assert_eq!(ids(store.filtered_images()), vec![2, 1]);
        store.update_filters(FiltersPatch::new().tags(["a"]).sort_by(SortBy::Likes));
        assert_eq!(ids(store.filtered_images()), vec![1]);

        store.clear_filters();

        assert_eq!(store.filters(), &GalleryFilters::default());
        assert_eq!(ids(store.filtered_images()), vec![1, 2]);
        assert!(!store.has_active_filters());
    }

    #[test]
    fn search_and_remove_tag_filter() {
        let mut store = store_with(vec![
            image(1, "Natureza", &["premium"], 0, 0),
            image(2, "Cidades", &["nova"], 0, 0),
            image(3, "Pessoas", &["nova", "popular"], 0, 0),
        ]);

        store.search_images("NATUR");
        assert_eq!(ids(store.filtered_images()), vec![1]);
        assert_eq!(store.filters().search_query, "NATUR");

        store.search_images("");
        store.update_filters(FiltersPatch::new().tags(["nova", "popular"]));
        assert_eq!(ids(store.filtered_images()), vec![3, 2]);
        assert_eq!(store.active_filter_count(), 1);

        store.remove_tag_filter("nova");
        assert_eq!(ids(store.filtered_images()), vec![3]);
        store.remove_tag_filter("popular");
        assert_eq!(store.filtered_images().len(), 3);
        assert!(!store.has_active_filters());
    }

    #[test]
    fn sort_order_alone_is_not_an_active_filter() {
        let mut store = store_with(two_images());
        store.update_filters(FiltersPatch::new().sort_by(SortBy::Oldest));
        assert!(!store.has_active_filters());
        assert_eq!(store.active_filter_count(), 0);
    }

    #[test]
    fn stats_summarize_collection() {
        let mut store = store_with(two_images());
        store.toggle_favorite(ImageId::new(1));

        let stats = store.image_stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.favorites, 1);
        assert_eq!(stats.categories, 2);
        assert_eq!(stats.total_views, 14);
        assert_eq!(stats.total_likes, 4);
    }

    #[test]
    fn snapshot_round_trip_restores_persisted_fields_only() {
        let mut store = store_with(two_images());
        store.toggle_favorite(ImageId::new(2));
        let img = store.image(ImageId::new(1)).unwrap().clone();
        store.set_selected_image(&img);
        store.update_filters(FiltersPatch::new().category("City"));

        let restored = GalleryStore::from_snapshot(
            PicsumGenerator::seeded(0),
            store.snapshot(),
            BufferCapacity::default(),
        );

        assert_eq!(restored.images(), store.images());
        assert_eq!(restored.favorites(), store.favorites());
        assert_eq!(restored.history(), store.history());
        assert_eq!(restored.filters(), &GalleryFilters::default());
        assert!(restored.selected_image().is_none());
        assert!(!restored.is_modal_open());
        assert_eq!(restored.filtered_images().len(), 2);
    }

    #[test]
    fn restore_rebuilds_stale_favorites() {
        let mut favorite = image(1, "A", &[], 0, 0);
        favorite.is_favorite = true;
        let snapshot = GallerySnapshot {
            images: vec![favorite, image(2, "A", &[], 0, 0)],
            favorites: vec![image(2, "A", &[], 0, 0)],
            history: ViewHistory::new(),
        };

        let store = GalleryStore::from_snapshot(
            PicsumGenerator::seeded(0),
            snapshot,
            BufferCapacity::default(),
        );

        assert_eq!(ids(store.favorites()), vec![1]);
        assert!(store.diagnostics().iter().any(|event| matches!(
            event.kind,
            crate::diagnostics::DiagnosticEventKind::Warning { .. }
        )));
    }

    #[test]
    fn operations_are_logged_to_diagnostics() {
        let mut store = store_with(two_images());
        store.toggle_favorite(ImageId::new(1));
        store.clear_filters();
        store.record_warning("settings unreadable");

        assert_eq!(store.diagnostics().len(), 3);
    }

    #[test]
    fn catalog_is_exposed() {
        let store = store_with(Vec::new());
        assert_eq!(store.categories().len(), 6);
        assert_eq!(store.tags().len(), 5);
    }
}
