use crate::shared::components::ui::FeaturedBadge;
use contracts::domain::a001_project::Project;
use leptos::prelude::*;

pub const CARD_CLASS: &str = "card group";
pub const EMPTY_CLASS: &str = "col-span-full text-center text-slate-400 py-12";
pub const FAILED_CLASS: &str = "col-span-full text-center text-red-400 py-12";
pub const EMPTY_MESSAGE: &str = "No projects found.";
pub const FAILED_MESSAGE: &str = "Failed to load projects. Please try again later.";

/// One project card: `data-category`, `img`, `h3 span`, badge, `p`, `.tag`.
///
/// The only link is the image wrapped in the primary link. The badge sits
/// beside the `h3`, so the heading text is the name alone when the page is
/// read back as fallback markup.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = project.primary_link().unwrap_or("#").to_string();
    let image = project.image.clone().map(|src| {
        let alt = project.name.clone();
        view! {
            <a href=href.clone() target="_blank" rel="noopener" class="block mb-4 group/image" draggable="false">
                <img
                    src=src
                    alt=alt
                    loading="lazy"
                    width="600"
                    height="800"
                    style="aspect-ratio:5/4;object-fit:cover;display:block;width:100%;border-radius:0.5rem;"
                    draggable="false"
                />
            </a>
        }
    });
    let badge = project.featured.then(|| view! { <FeaturedBadge /> });
    let tags = project
        .tags
        .iter()
        .cloned()
        .map(|tag| view! { <span class="tag">{tag}</span> })
        .collect_view();

    view! {
        <article class=CARD_CLASS data-category=project.category.clone()>
            {image}
            <div class="flex items-start justify-between gap-2 mb-2">
                <h3 class="flex-1 flex items-center flex-wrap">
                    <span class="text-brand-100 transition-colors duration-200 font-semibold text-lg">
                        {project.name.clone()}
                    </span>
                </h3>
                {badge}
            </div>
            <p class="text-slate-300 text-sm leading-relaxed mb-4">{project.description.clone()}</p>
            <div class="flex flex-wrap gap-2 mt-auto">{tags}</div>
        </article>
    }
}

#[component]
pub fn EmptyPlaceholder() -> impl IntoView {
    view! { <p class=EMPTY_CLASS>{EMPTY_MESSAGE}</p> }
}
