//! HTML page rendering.
//!
//! Every section of the homepage is a pure function from config records to a
//! [maud](https://maud.lambda.xyz/) `Markup` fragment; [`render_page`]
//! composes them in a fixed order. Nothing here touches the filesystem, so
//! rendering the same [`SiteConfig`] twice yields byte-identical HTML.
//!
//! ## Layout
//!
//! The page keeps the classic single-column, 800px-max-width nested-table
//! layout with inline styles. An external `stylesheet.css` is linked but not
//! generated; the inline styles carry the section styling so the page stands
//! on its own.
//!
//! ## Escaping
//!
//! Maud escapes all interpolation by default. The rich-text config fields
//! documented in [`crate::config`] (bio, research interests, descriptions,
//! news and miscellaneous text) are injected via `PreEscaped` — they are the
//! author's own markup on their own page. The lightbox script ships as a
//! static asset embedded at compile time.

use crate::config::{
    Author, Links, MiscItem, MiscSection, NewsItem, Profile, Publication, Research, SiteConfig,
};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const LIGHTBOX_JS: &str = include_str!("../static/lightbox.js");

const NBSP: PreEscaped<&str> = PreEscaped("&nbsp;");

/// The outermost 800px column table.
const PAGE_TABLE: &str = "width:100%;max-width:800px;border:0px;border-spacing:0px;\
    border-collapse:separate;margin-right:auto;margin-left:auto;";
/// Full-width inner table wrapping each section.
const SECTION_TABLE: &str = "width:100%;border:0px;border-spacing:0px;\
    border-collapse:separate;margin-right:auto;margin-left:auto;";
/// The publications table spaces its rows apart.
const PUBLICATIONS_TABLE: &str = "width:100%;border:0px;border-spacing:0px 10px;\
    border-collapse:separate;margin-right:auto;margin-left:auto;";
/// Underlined section heading (`News`, `Research`, `Miscellaneous`).
const SECTION_HEADING: &str = "border-bottom:2px solid #e0e0e0;padding-bottom:10px;";

/// Accent color for date tags and item labels.
const ACCENT: &str = "color:#2c5aa0;";

/// Background for rows flagged as representative work.
const HIGHLIGHT_BG: &str = "#ffffd0";

// ============================================================================
// Fragment renderers
// ============================================================================

/// Render the ordered author list. The site owner is emphasized, authors
/// with a homepage are linked, everyone else is plain text. List order is
/// authoritative: no sorting, no de-duplication.
pub fn author_list(authors: &[Author]) -> Markup {
    html! {
        @for (i, author) in authors.iter().enumerate() {
            @if i > 0 { ", " }
            @if author.is_me {
                strong { (author.name) }
            } @else if let Some(url) = author.url.as_deref().filter(|u| !u.is_empty()) {
                a href=(url) { (author.name) }
            } @else {
                (author.name)
            }
        }
    }
}

/// Render the "project page / paper / ..." anchor row. Which links appear,
/// and in what order, is decided by [`Links::labeled`].
pub fn link_row(links: &Links) -> Markup {
    html! {
        @for (i, (label, url)) in links.labeled().into_iter().enumerate() {
            @if i > 0 { " / " }
            a href=(url) { (label) }
        }
    }
}

/// Render `<em>venue</em>, year` plus at most one presentation-tier tag.
/// Oral wins when both flags are set. An award is additive: it appears
/// whether or not a tier tag did.
pub fn venue_line(publication: &Publication) -> Markup {
    html! {
        em { (publication.venue) }
        ", "
        (publication.year)
        @if publication.oral {
            (NBSP)
            strong style="color:#cc0000;" { "(Oral)" }
        } @else if publication.spotlight {
            (NBSP)
            strong style="color:#ff8080;" { "(Spotlight)" }
        }
        @if let Some(award) = &publication.award {
            (NBSP)
            strong style="color:#cc0000;" { (award) }
        }
    }
}

/// One table row per publication: teaser image on the left, title, authors,
/// venue, links, and description on the right.
pub fn publication_row(publication: &Publication) -> Markup {
    let row_bg = publication.highlight.then_some(HIGHLIGHT_BG);
    let open_lightbox = format!("openLightbox('{}')", publication.image);
    html! {
        tr bgcolor=[row_bg] {
            td style="padding:20px;width:25%;vertical-align:middle" {
                div style="border-radius:4px;overflow:hidden;box-shadow:0 1px 3px rgba(0,0,0,0.12);" {
                    img src=(publication.image) width="160"
                        style="width:100%;display:block;cursor:pointer;transition:transform 0.2s;"
                        onmouseover="this.style.transform='scale(1.05)'"
                        onmouseout="this.style.transform='scale(1)'"
                        onclick=(open_lightbox);
                }
            }
            td style="padding:20px;width:75%;vertical-align:middle" {
                a href=(publication.links.title_target()) {
                    span.papertitle { (publication.title) }
                }
                br;
                span style="font-size:14px;color:#555;" {
                    (author_list(&publication.authors))
                }
                br;
                (venue_line(publication))
                br;
                span style="font-size:14px;" {
                    (link_row(&publication.links))
                }
                p {}
                p style="color:#666;font-size:14px;line-height:1.2;" {
                    (PreEscaped(publication.description.as_str()))
                }
            }
        }
    }
}

/// The News section: a scrollable list of dated items. An empty list
/// renders nothing at all — no heading, no table.
pub fn news_section(items: &[NewsItem]) -> Markup {
    if items.is_empty() {
        return html! {};
    }
    html! {
        table style=(SECTION_TABLE) { tbody {
            tr {
                td style="padding:20px;width:100%;vertical-align:middle" {
                    h2 style=(SECTION_HEADING) { "News" }
                    div style="max-height:200px;overflow-y:auto;margin-top:15px;" {
                        ul style="margin:0;padding-left:20px;" {
                            @for item in items {
                                li style="margin-bottom:10px;line-height:1.6;" {
                                    @if let Some(date) = &item.date {
                                        strong style=(ACCENT) { "[" (date) "]" }
                                        " "
                                    }
                                    (PreEscaped(item.content.as_str()))
                                }
                            }
                        }
                    }
                }
            }
        } }
    }
}

/// The Miscellaneous section. An empty list renders nothing at all. Each
/// section contributes whichever of heading, paragraph, and item list it
/// carries; the three are independent, not mutually exclusive.
pub fn miscellaneous_section(sections: &[MiscSection]) -> Markup {
    if sections.is_empty() {
        return html! {};
    }
    html! {
        table style=(SECTION_TABLE) { tbody {
            tr {
                td style="padding:20px;width:100%;vertical-align:middle" {
                    h2 style=(SECTION_HEADING) { "Miscellaneous" }
                    @for section in sections {
                        @if let Some(title) = &section.title {
                            h3 style="color:#333;margin-top:20px;margin-bottom:10px;font-weight:600;" {
                                (title)
                            }
                        }
                        @if let Some(content) = &section.content {
                            p style="color:#666;line-height:1.7;margin:10px 0;" {
                                (PreEscaped(content.as_str()))
                            }
                        }
                        @if !section.items.is_empty() {
                            ul style="line-height:1.8;margin:10px 0;padding-left:20px;" {
                                @for item in &section.items {
                                    (misc_item(item))
                                }
                            }
                        }
                    }
                }
            }
        } }
    }
}

/// One miscellaneous list entry. Detailed items bold-prefix their label and
/// wrap the whole entry in an anchor when a link is present.
fn misc_item(item: &MiscItem) -> Markup {
    let body = match item {
        MiscItem::Plain(text) => html! { (PreEscaped(text.as_str())) },
        MiscItem::Detailed { label, text, .. } => html! {
            @if let Some(label) = label.as_deref().filter(|l| !l.is_empty()) {
                strong style=(ACCENT) { (label) }
                ": "
            }
            (PreEscaped(text.as_str()))
        },
    };
    let link = match item {
        MiscItem::Detailed { link, .. } => link.as_deref().filter(|l| !l.is_empty()),
        MiscItem::Plain(_) => None,
    };
    html! {
        li style="color:#555;margin-bottom:8px;" {
            @if let Some(link) = link {
                a href=(link) { (body) }
            } @else {
                (body)
            }
        }
    }
}

/// The profile card: name, generated intro sentence, contact link row, and
/// the circular photo.
fn profile_card(profile: &Profile) -> Markup {
    html! {
        table style=(SECTION_TABLE) { tbody {
            tr style="padding:0px" {
                td style="padding:2.5%;width:63%;vertical-align:middle" {
                    p.name style="text-align: center;" { (profile.name) }
                    p style="line-height:1.7;" {
                        "I'm a " (profile.title) " in the " (profile.department) " at "
                        a href=(profile.institution_url) { (profile.institution) }
                        ", advised by "
                        a href=(profile.advisor_url) { (profile.advisor) }
                        ". "
                        (PreEscaped(profile.bio.as_str()))
                    }
                    p style="text-align:center" {
                        a href={ "mailto:" (profile.email) } { "Email" }
                        (NBSP) "/" (NBSP)
                        a href=(profile.scholar) { "Scholar" }
                        (NBSP) "/" (NBSP)
                        a href=(profile.twitter) { "Twitter" }
                        (NBSP) "/" (NBSP)
                        a href=(profile.github) { "Github" }
                    }
                }
                td style="padding:2.5%;width:37%;max-width:37%" {
                    img style="width:100%;max-width:100%;object-fit: cover; border-radius: 50%;box-shadow:0 2px 8px rgba(0,0,0,0.15);"
                        alt="profile photo" src=(profile.photo);
                }
            }
        } }
    }
}

/// The Research heading and interests paragraph.
fn research_section(research: &Research) -> Markup {
    html! {
        table style=(SECTION_TABLE) { tbody {
            tr {
                td style="padding:20px;width:100%;vertical-align:middle" {
                    h2 style=(SECTION_HEADING) { "Research" }
                    p style="line-height:1.7;color:#555;margin-top:15px;" {
                        (PreEscaped(research.interests.as_str()))
                    }
                }
            }
        } }
    }
}

/// The hidden full-screen image overlay plus its behavior script. Clicking
/// any publication image opens it; clicking anywhere, the close control, or
/// Escape dismisses it.
pub fn lightbox() -> Markup {
    html! {
        div id="lightbox"
            style="display:none;position:fixed;z-index:9999;left:0;top:0;width:100%;height:100%;background-color:rgba(0,0,0,0.9);cursor:pointer;"
            onclick="closeLightbox()" {
            span style="position:absolute;top:20px;right:40px;color:#f1f1f1;font-size:40px;font-weight:bold;cursor:pointer;"
                onclick="closeLightbox()" { (PreEscaped("&times;")) }
            img id="lightbox-img"
                style="margin:auto;display:block;max-width:90%;max-height:90%;position:absolute;top:50%;left:50%;transform:translate(-50%,-50%);box-shadow:0 4px 20px rgba(0,0,0,0.5);";
        }
        script { (PreEscaped(LIGHTBOX_JS)) }
    }
}

/// Footer attribution.
fn footer() -> Markup {
    html! {
        table style=(SECTION_TABLE) { tbody {
            tr {
                td style="padding:0px" {
                    br;
                    p style="text-align:right;font-size:small;color:#999;" {
                        "Website template from "
                        a href="https://jonbarron.info/" style="color:#999;" { "Jon Barron" }
                    }
                }
            }
        } }
    }
}

// ============================================================================
// Page assembly
// ============================================================================

/// Assemble the complete document. The section sequence is a fixed constant:
///
/// 1. head (title and author meta from the profile name)
/// 2. profile card
/// 3. news — omitted entirely when the list is empty
/// 4. research
/// 5. publications table, rows in document order
/// 6. miscellaneous — omitted entirely when the list is empty
/// 7. lightbox markup and script
/// 8. footer attribution
pub fn render_page(site: &SiteConfig) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta http-equiv="Content-Type" content="text/html; charset=UTF-8";
                title { (site.profile.name) }
                meta name="author" content=(site.profile.name);
                meta name="viewport" content="width=device-width, initial-scale=1";
                link rel="shortcut icon" href="images/favicon/favicon.ico" type="image/x-icon";
                link rel="stylesheet" type="text/css" href="stylesheet.css";
            }
            body {
                table style=(PAGE_TABLE) { tbody {
                    tr style="padding:0px" {
                        td style="padding:0px" {
                            (profile_card(&site.profile))
                            (news_section(&site.news))
                            (research_section(&site.research))
                            table style=(PUBLICATIONS_TABLE) { tbody {
                                @for publication in &site.publications {
                                    (publication_row(publication))
                                }
                            } }
                            (miscellaneous_section(&site.miscellaneous))
                            (lightbox())
                            (footer())
                        }
                    }
                } }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn author(name: &str) -> Author {
        Author {
            name: name.to_string(),
            url: None,
            is_me: false,
        }
    }

    fn sample_profile() -> Profile {
        Profile {
            name: "A. Researcher".to_string(),
            title: "Ph.D. Student".to_string(),
            department: "Department of Computer Science".to_string(),
            institution: "Some University".to_string(),
            institution_url: "https://some.university/".to_string(),
            advisor: "Prof. Advisor".to_string(),
            advisor_url: "https://advisor.example/".to_string(),
            bio: "I study rendering.".to_string(),
            email: "a@some.university".to_string(),
            scholar: "https://scholar.example/".to_string(),
            twitter: "https://twitter.example/".to_string(),
            github: "https://github.example/".to_string(),
            photo: "images/me.jpg".to_string(),
        }
    }

    fn sample_publication() -> Publication {
        Publication {
            title: "X".to_string(),
            image: "x.png".to_string(),
            authors: vec![Author {
                name: "A".to_string(),
                url: None,
                is_me: true,
            }],
            links: Links {
                paper: Some("p.pdf".to_string()),
                ..Links::default()
            },
            venue: "Conf".to_string(),
            year: 2024,
            oral: false,
            spotlight: false,
            award: None,
            description: "d".to_string(),
            highlight: false,
        }
    }

    fn sample_site() -> SiteConfig {
        SiteConfig {
            profile: sample_profile(),
            research: Research {
                interests: "Rendering, mostly.".to_string(),
            },
            publications: vec![sample_publication()],
            news: vec![],
            miscellaneous: vec![],
        }
    }

    // =========================================================================
    // Authors
    // =========================================================================

    #[test]
    fn self_author_is_emphasized_regardless_of_position() {
        let mut authors = vec![author("First"), author("Me"), author("Last")];
        authors[1].is_me = true;
        let html = author_list(&authors).into_string();
        assert!(html.contains("<strong>Me</strong>"));

        authors.swap(1, 2);
        let html = author_list(&authors).into_string();
        assert!(html.contains("<strong>Me</strong>"));
    }

    #[test]
    fn author_with_url_is_linked() {
        let mut a = author("Colleague");
        a.url = Some("https://colleague.example/".to_string());
        let html = author_list(&[a]).into_string();
        assert!(html.contains(r#"<a href="https://colleague.example/">Colleague</a>"#));
    }

    #[test]
    fn author_with_empty_url_is_plain_text() {
        let mut a = author("Quiet");
        a.url = Some(String::new());
        let html = author_list(&[a]).into_string();
        assert_eq!(html, "Quiet");
    }

    #[test]
    fn author_order_is_preserved() {
        let html = author_list(&[author("B"), author("A")]).into_string();
        assert_eq!(html, "B, A");
    }

    // =========================================================================
    // Links
    // =========================================================================

    #[test]
    fn link_row_uses_table_order_not_declaration_order() {
        let links = Links {
            data: Some("d".into()),
            project: Some("pr".into()),
            ..Links::default()
        };
        let html = link_row(&links).into_string();
        assert_eq!(html, r#"<a href="pr">project page</a> / <a href="d">data</a>"#);
    }

    #[test]
    fn link_row_skips_empty_values_silently() {
        let links = Links {
            paper: Some(String::new()),
            code: Some("c".into()),
            ..Links::default()
        };
        let html = link_row(&links).into_string();
        assert_eq!(html, r#"<a href="c">code</a>"#);
    }

    #[test]
    fn link_row_empty_set_renders_nothing() {
        assert_eq!(link_row(&Links::default()).into_string(), "");
    }

    // =========================================================================
    // Venue
    // =========================================================================

    #[test]
    fn venue_plain_has_no_annotations() {
        let html = venue_line(&sample_publication()).into_string();
        assert_eq!(html, "<em>Conf</em>, 2024");
    }

    #[test]
    fn venue_oral_wins_over_spotlight() {
        let mut publication = sample_publication();
        publication.oral = true;
        publication.spotlight = true;
        let html = venue_line(&publication).into_string();
        assert!(html.contains("(Oral)"));
        assert!(!html.contains("(Spotlight)"));
    }

    #[test]
    fn venue_spotlight_alone() {
        let mut publication = sample_publication();
        publication.spotlight = true;
        let html = venue_line(&publication).into_string();
        assert!(html.contains("(Spotlight)"));
        assert!(!html.contains("(Oral)"));
    }

    #[test]
    fn venue_award_is_additive_to_oral() {
        let mut publication = sample_publication();
        publication.oral = true;
        publication.award = Some("Best Paper Award".to_string());
        let html = venue_line(&publication).into_string();
        assert!(html.contains("(Oral)"));
        assert!(html.contains("Best Paper Award"));
    }

    #[test]
    fn venue_award_appears_without_tier_flags() {
        let mut publication = sample_publication();
        publication.award = Some("Best Paper Award".to_string());
        let html = venue_line(&publication).into_string();
        assert!(html.contains("Best Paper Award"));
        assert!(!html.contains("(Oral)"));
    }

    // =========================================================================
    // Publication rows
    // =========================================================================

    #[test]
    fn publication_row_title_links_to_paper_as_last_resort() {
        let html = publication_row(&sample_publication()).into_string();
        assert!(html.contains(r#"<a href="p.pdf">"#));
    }

    #[test]
    fn publication_row_title_prefers_project_link() {
        let mut publication = sample_publication();
        publication.links.project = Some("https://proj.example/".to_string());
        publication.links.arxiv = Some("https://arxiv.example/".to_string());
        let html = publication_row(&publication).into_string();
        assert!(html.contains(r#"<a href="https://proj.example/">"#));
    }

    #[test]
    fn publication_row_without_links_uses_placeholder_anchor() {
        let mut publication = sample_publication();
        publication.links = Links::default();
        let html = publication_row(&publication).into_string();
        assert!(html.contains(r##"<a href="#">"##));
    }

    #[test]
    fn publication_row_highlight_sets_background() {
        let mut publication = sample_publication();
        publication.highlight = true;
        let html = publication_row(&publication).into_string();
        assert!(html.contains(r##"<tr bgcolor="#ffffd0">"##));

        publication.highlight = false;
        let html = publication_row(&publication).into_string();
        assert!(!html.contains("bgcolor"));
    }

    #[test]
    fn publication_row_wires_lightbox_handler() {
        let html = publication_row(&sample_publication()).into_string();
        assert!(html.contains(r#"onclick="openLightbox('x.png')""#));
    }

    #[test]
    fn publication_title_is_escaped() {
        let mut publication = sample_publication();
        publication.title = "<script>alert('xss')</script>".to_string();
        let html = publication_row(&publication).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    // =========================================================================
    // News
    // =========================================================================

    #[test]
    fn news_empty_list_renders_nothing() {
        assert_eq!(news_section(&[]).into_string(), "");
    }

    #[test]
    fn news_dated_item_gets_bracketed_tag() {
        let items = vec![NewsItem {
            date: Some("2026-06".to_string()),
            content: "Paper accepted.".to_string(),
        }];
        let html = news_section(&items).into_string();
        assert!(html.contains("News</h2>"));
        assert!(html.contains("[2026-06]"));
        assert!(html.contains("Paper accepted."));
    }

    #[test]
    fn news_undated_item_is_bare_content() {
        let items = vec![NewsItem {
            date: None,
            content: "Something happened.".to_string(),
        }];
        let html = news_section(&items).into_string();
        assert!(!html.contains('['));
        assert!(html.contains("Something happened."));
    }

    // =========================================================================
    // Miscellaneous
    // =========================================================================

    #[test]
    fn miscellaneous_empty_list_renders_nothing() {
        assert_eq!(miscellaneous_section(&[]).into_string(), "");
    }

    #[test]
    fn miscellaneous_section_parts_are_independent() {
        let sections = vec![MiscSection {
            title: Some("Teaching".to_string()),
            content: Some("A paragraph.".to_string()),
            items: vec![MiscItem::Plain("An item.".to_string())],
        }];
        let html = miscellaneous_section(&sections).into_string();
        assert!(html.contains("<h3"));
        assert!(html.contains("Teaching"));
        assert!(html.contains("A paragraph."));
        assert!(html.contains("<li"));
        assert!(html.contains("An item."));
    }

    #[test]
    fn miscellaneous_title_only_section_has_no_list() {
        let sections = vec![MiscSection {
            title: Some("Service".to_string()),
            content: None,
            items: vec![],
        }];
        let html = miscellaneous_section(&sections).into_string();
        assert!(html.contains("Service"));
        assert!(!html.contains("<ul"));
        assert!(!html.contains("<p "));
    }

    #[test]
    fn miscellaneous_detailed_item_bolds_label() {
        let sections = vec![MiscSection {
            title: None,
            content: None,
            items: vec![MiscItem::Detailed {
                label: Some("Reviewer".to_string()),
                text: "SOMECONF 2026".to_string(),
                link: None,
            }],
        }];
        let html = miscellaneous_section(&sections).into_string();
        assert!(html.contains("<strong"));
        assert!(html.contains("Reviewer"));
        assert!(html.contains(": SOMECONF 2026"));
    }

    #[test]
    fn miscellaneous_linked_item_wraps_whole_entry() {
        let sections = vec![MiscSection {
            title: None,
            content: None,
            items: vec![MiscItem::Detailed {
                label: Some("Talk".to_string()),
                text: "Recording".to_string(),
                link: Some("https://video.example/".to_string()),
            }],
        }];
        let html = miscellaneous_section(&sections).into_string();
        assert!(html.contains(r#"<a href="https://video.example/">"#));
        // Label and text both sit inside the anchor.
        let anchor_start = html.find("<a href").unwrap();
        let anchor_end = html.find("</a>").unwrap();
        let inside = &html[anchor_start..anchor_end];
        assert!(inside.contains("Talk"));
        assert!(inside.contains("Recording"));
    }

    // =========================================================================
    // Page assembly
    // =========================================================================

    #[test]
    fn page_starts_with_doctype_and_titles_from_profile() {
        let html = render_page(&sample_site()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A. Researcher</title>"));
        assert!(html.contains(r#"<meta name="author" content="A. Researcher">"#));
    }

    #[test]
    fn minimal_scenario_markup() {
        let html = render_page(&sample_site()).into_string();
        assert!(html.contains("<strong>A</strong>"));
        assert!(html.contains(r#"<a href="p.pdf">paper</a>"#));
        assert!(html.contains("<em>Conf</em>, 2024"));
        assert!(!html.contains("(Oral)"));
        assert!(!html.contains("(Spotlight)"));
    }

    #[test]
    fn empty_optional_sections_leave_no_headings() {
        let html = render_page(&sample_site()).into_string();
        assert!(!html.contains("News</h2>"));
        assert!(!html.contains("Miscellaneous</h2>"));
        // The always-on sections are still there.
        assert!(html.contains("Research</h2>"));
    }

    #[test]
    fn populated_optional_sections_appear_in_order() {
        let mut site = sample_site();
        site.news = vec![NewsItem {
            date: None,
            content: "n".to_string(),
        }];
        site.miscellaneous = vec![MiscSection {
            title: Some("Misc".to_string()),
            content: None,
            items: vec![],
        }];
        let html = render_page(&site).into_string();
        let news = html.find("News</h2>").unwrap();
        let research = html.find("Research</h2>").unwrap();
        let misc = html.find("Miscellaneous</h2>").unwrap();
        assert!(news < research);
        assert!(research < misc);
    }

    #[test]
    fn lightbox_block_appears_once() {
        let html = render_page(&sample_site()).into_string();
        assert_eq!(html.matches(r#"id="lightbox""#).count(), 1);
        assert!(html.contains("function openLightbox"));
        assert!(html.contains("function closeLightbox"));
    }

    #[test]
    fn publication_rows_follow_document_order() {
        let mut site = sample_site();
        let mut second = sample_publication();
        second.title = "Z Second".to_string();
        let mut first = sample_publication();
        first.title = "A First".to_string();
        // Deliberately not alphabetical by title.
        site.publications = vec![second, first];
        let html = render_page(&site).into_string();
        assert!(html.find("Z Second").unwrap() < html.find("A First").unwrap());
    }
}
