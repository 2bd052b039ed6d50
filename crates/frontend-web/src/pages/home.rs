//! Landing page

use yew::prelude::*;
use yew_router::components::Link;

use crate::app::Route;
use crate::components::landing::{Cta, Footer, Header, Hero};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-slate-900 via-slate-800 to-sky-500 text-white">
            <Header />
            <main class="flex-1 grid place-items-center px-4 py-6">
                <div class="max-w-3xl w-full grid gap-4 text-left">
                    <Hero />
                    <p class="text-lg text-white/95 mt-2">
                        {"Captura señales con AD8232 + ADS1115, procesa en FastAPI y explora métricas en Streamlit. Inicio de sesión requerido."}
                    </p>
                    <div class="flex gap-2 mt-2">
                        <Link<Route> to={Route::Login} classes="px-5 py-2.5 rounded-lg bg-sky-500 hover:bg-sky-400 text-white text-lg font-medium">
                            {"Ingresar"}
                        </Link<Route>>
                        <a
                            href="https://github.com/Edcal21/Proyecto-tesis"
                            target="_blank"
                            rel="noreferrer"
                            class="px-5 py-2.5 rounded-lg border border-white/30 text-white text-lg hover:bg-white/10"
                        >
                            {"Ver en GitHub"}
                        </a>
                    </div>
                </div>
            </main>
            <Cta />
            <Footer />
        </div>
    }
}
