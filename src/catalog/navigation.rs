//! Sidebar and list-navigation regions.

use crate::engine::{Region, SubstitutionMap};

const SIDEBAR_VIEWS: &[(&str, &str)] = &[
    ("Views", "ビュー"),
    ("Notes", "ノート一覧"),
    ("Files", "ファイル"),
    ("Starred", "お気に入り"),
    ("Archived", "アーカイブ"),
    ("Trash", "ゴミ箱"),
    ("Untagged", "タグなし"),
    ("Create a new smart view", "スマートビューを作成"),
];

pub(super) fn sidebar_views() -> Region {
    Region::new(
        "sidebar-views",
        &[
            ".section-title-bar .title, #react-tag-all-notes, #react-tag-files, #react-tag-starred-notes, #react-tag-archived-notes, #react-tag-trashed-notes, #react-tag-untagged-notes",
            "button[title]",
        ],
        SubstitutionMap::from_pairs(SIDEBAR_VIEWS),
    )
    .with_attrs()
}

const TAGS_SECTION: &[(&str, &str)] = &[
    ("Tags", "タグ"),
    ("Folders", "フォルダ"),
    ("Create a new tag (Ctrl+Alt+N)", "タグを作成（Ctrl+Alt+N）"),
];

pub(super) fn tags_section() -> Region {
    Region::new(
        "tags-section",
        &[".section-title-bar .title", "button[title]"],
        SubstitutionMap::from_pairs(TAGS_SECTION),
    )
    .with_attrs()
}

const SEARCH_BOXES: &[(&str, &str)] = &[
    ("Search...", "検索..."),
    ("Search tags...", "タグを検索..."),
];

pub(super) fn search_boxes() -> Region {
    Region::new(
        "search-boxes",
        &["input[placeholder]"],
        SubstitutionMap::from_pairs(SEARCH_BOXES),
    )
    .with_attrs()
}

const SEARCH_MESSAGES: &[(&str, &str)] = &[
    (
        "No smart views found. Try a different search.",
        "スマートビューが見つかりません。他の検索条件をお試しください。",
    ),
    (
        "No tags found. Try a different search.",
        "タグが見つかりません。他の検索条件をお試しください。",
    ),
];

pub(super) fn search_messages() -> Region {
    Region::new(
        "search-messages",
        &["#navigation-content section div"],
        SubstitutionMap::from_pairs(SEARCH_MESSAGES),
    )
    .with_whole_element()
}

const FILTER_BUTTONS: &[(&str, &str)] = &[
    ("Protected Contents", "保護されたノート"),
    ("Archived", "アーカイブ済み"),
    ("Trashed", "ゴミ箱"),
];

pub(super) fn filter_buttons() -> Region {
    Region::new(
        "filter-buttons",
        &["button[role=\"checkbox\"]"],
        SubstitutionMap::from_pairs(FILTER_BUTTONS),
    )
    .with_whole_element()
}

const ITEMS_LIST_TITLES: &[(&str, &str)] = &[
    ("Starred", "お気に入り"),
    ("Archived", "アーカイブ"),
    ("Trash", "ゴミ箱"),
    ("Untagged", "タグなし"),
    ("Files", "ファイル"),
    ("Notes", "ノート一覧"),
];

/// The list header is re-rendered by rewriting its text node in place,
/// so this region also watches character data and runs after the host's
/// own re-render tick.
pub(super) fn items_list_title() -> Region {
    Region::new(
        "items-list-title",
        &[
            ".section-title-bar-header .text-2xl.font-semibold.text-text",
            ".section-title-bar-header .md\\:text-lg.font-semibold.text-text",
        ],
        SubstitutionMap::from_pairs(ITEMS_LIST_TITLES),
    )
    .with_whole_element()
    .with_character_data()
    .with_deferred()
}

pub(super) fn regions() -> Vec<Region> {
    vec![
        sidebar_views(),
        tags_section(),
        search_boxes(),
        search_messages(),
        filter_buttons(),
        items_list_title(),
    ]
}
