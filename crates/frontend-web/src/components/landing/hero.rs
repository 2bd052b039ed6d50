use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HeroProps {
    #[prop_or("Monitoreo, análisis y alertas en tiempo real".into())]
    pub title: AttrValue,
    #[prop_or("Conecta la Raspberry Pi, analiza ECG y visualiza resultados en Streamlit.".into())]
    pub subtitle: AttrValue,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <div class="flex items-center gap-4 px-4 py-3 rounded-2xl border border-white/10 shadow-lg bg-gradient-to-r from-sky-300/20 to-indigo-400/20">
            <svg
                viewBox="0 0 24 24"
                class="w-20 h-20 shrink-0 fill-rose-400 animate-pulse"
                aria-hidden="true"
            >
                <path d="M12 21s-6.716-4.438-9.428-7.15C.86 12.138.5 10.91.5 9.75.5 7.126 2.626 5 5.25 5c1.52 0 2.944.664 3.9 1.72L12 9.8l2.85-3.08C15.806 5.664 17.23 5 18.75 5 21.374 5 23.5 7.126 23.5 9.75c0 1.16-.36 2.388-2.072 4.1C18.716 16.562 12 21 12 21z"/>
            </svg>
            <div class="flex-1">
                <h3 class="text-2xl font-semibold text-white m-0">{props.title.clone()}</h3>
                <p class="mt-1 text-slate-200/90 m-0">{props.subtitle.clone()}</p>
            </div>
        </div>
    }
}
