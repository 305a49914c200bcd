use crate::engine::{ensure_chart_engine, ChartMount, PointerEvent};
use dioxus::prelude::*;

/// Mounts a chart once and forwards its pointer events to `on_event` until
/// the component unmounts.
pub fn use_chart(init: impl FnOnce() -> ChartMount, on_event: Callback<PointerEvent>) {
    let mount = use_hook(init);
    let dispose = use_hook(|| mount.dispose_script());

    use_future(move || {
        let mount = mount.clone();
        async move {
            ensure_chart_engine();
            let mut eval = document::eval(&mount.mount_script());
            tracing::debug!("Mounting chart into #{}", mount.container_id);

            loop {
                match eval.recv::<PointerEvent>().await {
                    Ok(PointerEvent::Failed { reason }) => {
                        tracing::error!("Chart #{} failed to render: {}", mount.container_id, reason);
                        break;
                    }
                    Ok(event) => on_event.call(event),
                    Err(e) => {
                        tracing::warn!("Chart #{} event channel closed: {:?}", mount.container_id, e);
                        break;
                    }
                }
            }
        }
    });

    use_drop(move || {
        let _ = document::eval(&dispose);
    });
}
