use leptos::prelude::*;

fn stroke_svg(paths: impl IntoView + 'static) -> AnyView {
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths}
        </svg>
    }
    .into_any()
}

/// Inline SVG icon by name. Unknown names render a small dot.
pub fn icon(name: &str) -> AnyView {
    match name {
        "database" => stroke_svg(view! {
            <ellipse cx="12" cy="5" rx="9" ry="3"/>
            <path d="M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5"/>
            <path d="M3 12c0 1.66 4 3 9 3s9-1.34 9-3"/>
        }),
        "moon" => stroke_svg(view! {
            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"/>
        }),
        "sun" => stroke_svg(view! {
            <circle cx="12" cy="12" r="4"/>
            <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41"/>
        }),
        "upload" => stroke_svg(view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <path d="M17 8l-5-5-5 5"/>
            <path d="M12 3v12"/>
        }),
        "download" => stroke_svg(view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <path d="M7 10l5 5 5-5"/>
            <path d="M12 15V3"/>
        }),
        "file-code" => stroke_svg(view! {
            <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/>
            <path d="M14 2v6h6"/>
            <path d="M10 13l-2 2 2 2M14 13l2 2-2 2"/>
        }),
        "file" => stroke_svg(view! {
            <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/>
            <path d="M14 2v6h6"/>
        }),
        "folder" => stroke_svg(view! {
            <path d="M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z"/>
        }),
        "copy" => stroke_svg(view! {
            <rect x="9" y="9" width="13" height="13" rx="2"/>
            <path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"/>
        }),
        "help" => stroke_svg(view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/>
            <path d="M12 17h.01"/>
        }),
        "info" => stroke_svg(view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 16v-4"/>
            <path d="M12 8h.01"/>
        }),
        "x" => stroke_svg(view! {
            <path d="M18 6L6 18"/>
            <path d="M6 6l12 12"/>
        }),
        "check" => stroke_svg(view! {
            <path d="M20 6L9 17l-5-5"/>
        }),
        "trash" => stroke_svg(view! {
            <path d="M3 6h18"/>
            <path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/>
            <path d="M10 11v6M14 11v6"/>
            <path d="M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2"/>
        }),
        "save" => stroke_svg(view! {
            <path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z"/>
            <path d="M17 21v-8H7v8"/>
            <path d="M7 3v5h8"/>
        }),
        "list" => stroke_svg(view! {
            <path d="M8 6h13M8 12h13M8 18h13"/>
            <path d="M3 6h.01M3 12h.01M3 18h.01"/>
        }),
        "plug" => stroke_svg(view! {
            <path d="M12 22v-5"/>
            <path d="M9 8V2M15 8V2"/>
            <path d="M18 8v5a4 4 0 0 1-4 4h-4a4 4 0 0 1-4-4V8z"/>
        }),
        "unplug" => stroke_svg(view! {
            <path d="M19 5l3-3M2 22l3-3"/>
            <path d="M6.3 20.3a2.4 2.4 0 0 0 3.4 0L12 18l-6-6-2.3 2.3a2.4 2.4 0 0 0 0 3.4z"/>
            <path d="M7.5 13.5L10 11M10.5 16.5L13 14"/>
            <path d="M12 6l6 6 2.3-2.3a2.4 2.4 0 0 0 0-3.4l-2.6-2.6a2.4 2.4 0 0 0-3.4 0z"/>
        }),
        "eraser" => stroke_svg(view! {
            <path d="M7 21l-4.3-4.3a1 1 0 0 1 0-1.4l10-10a1 1 0 0 1 1.4 0l5.6 5.6a1 1 0 0 1 0 1.4L11 21"/>
            <path d="M22 21H7"/>
            <path d="M5 11l9 9"/>
        }),
        "play" => stroke_svg(view! {
            <path d="M5 3l14 9-14 9z"/>
        }),
        "terminal" => stroke_svg(view! {
            <path d="M4 17l6-6-6-6"/>
            <path d="M12 19h8"/>
        }),
        "external" => stroke_svg(view! {
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>
            <path d="M15 3h6v6"/>
            <path d="M10 14L21 3"/>
        }),
        _ => stroke_svg(view! {
            <circle cx="12" cy="12" r="2"/>
        }),
    }
}
