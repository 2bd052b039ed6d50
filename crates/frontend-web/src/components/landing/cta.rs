use yew::prelude::*;
use yew_router::components::Link;

use crate::app::Route;

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section class="py-10">
            <div class="max-w-5xl mx-auto px-4">
                <div class="rounded-2xl border border-white/10 bg-white/5 p-6 flex flex-wrap items-center justify-between gap-4">
                    <div>
                        <h2 class="text-xl font-semibold text-white m-0">{"Listo para monitorear tu ECG?"}</h2>
                        <p class="text-slate-300 mt-1 m-0">{"Conecta tu sensor, visualiza en tiempo real y recibe alertas automáticas."}</p>
                    </div>
                    <div class="flex gap-2">
                        <Link<Route> to={Route::Login} classes="px-4 py-2 rounded-lg bg-sky-500 hover:bg-sky-400 text-white font-medium">
                            {"Ingresar"}
                        </Link<Route>>
                        <a
                            href="https://github.com/Edcal21/Proyecto-tesis"
                            target="_blank"
                            rel="noreferrer"
                            class="px-4 py-2 rounded-lg border border-white/30 text-white hover:bg-white/10"
                        >
                            {"Ver en GitHub"}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
