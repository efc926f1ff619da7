use crate::particles::ParticleField;
use yew::prelude::*;

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

#[function_component(ParticleBackdrop)]
pub fn particle_backdrop() -> Html {
    let field = use_state(|| ParticleField::with_seed(random_seed()));

    html! {
        <div class="particle-field" aria-hidden="true">
            { for field.particles().iter().map(|particle| html! {
                <div class="particle" style={particle.style()}></div>
            }) }
        </div>
    }
}
