use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="py-7">
            <div class="max-w-5xl mx-auto px-4 border-t border-white/10 pt-4 flex flex-wrap items-center justify-between gap-3 text-sm">
                <span class="text-white/90">{format!("© {year} Proyecto-tesis — Uso educativo, no diagnóstico.")}</span>
                <span class="text-white/80">{"Contacto: info@local.test"}</span>
            </div>
        </footer>
    }
}
