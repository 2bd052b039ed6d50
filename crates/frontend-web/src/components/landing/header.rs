use yew::prelude::*;
use yew_router::components::Link;

use crate::app::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="max-w-5xl mx-auto w-full flex items-center justify-between py-4 px-4" role="banner">
            <div class="flex items-center gap-2">
                <img src="/medinic-logo.png" alt="MEDINIC" class="h-9" />
                <strong class="text-white">{"Plataforma ECG"}</strong>
            </div>
            <nav>
                <Link<Route> to={Route::Login} classes="px-3 py-1 rounded-lg bg-white text-slate-900 text-sm font-medium hover:bg-slate-200">
                    {"Ingresar"}
                </Link<Route>>
            </nav>
        </header>
    }
}
