use leptos::prelude::*;
use leptos::reactive::wrappers::write::SignalSetter;
use thaw::*;

/// Write side of the dialog model: thaw closes on backdrop click and Esc by
/// writing `false`, which must go through the owner's guarded close instead
/// of clearing the flag directly.
pub fn close_through(on_close: Callback<()>) -> SignalSetter<bool> {
    SignalSetter::map(move |open: bool| {
        if !open {
            on_close.run(());
        }
    })
}

/// "Are you sure?" dialog in front of every delete.
///
/// `open` is the owner's confirmation flag and is only read here; both
/// buttons are disabled while the delete is in flight.
#[component]
pub fn AlertModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let mask_closeable = Signal::derive(move || !loading.get());

    view! {
        <Dialog open=(open, close_through(on_close)) mask_closeable=mask_closeable>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Você tem certeza?"</DialogTitle>
                    <DialogContent>"Esta ação não pode ser desfeita."</DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            disabled=loading
                            on_click=move |_| on_close.run(())
                        >
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=loading
                            on_click=move |_| on_confirm.run(())
                        >
                            "Continuar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_goes_through_on_close() {
        let closes = RwSignal::new(0u32);
        let setter = close_through(Callback::new(move |_: ()| closes.update(|n| *n += 1)));

        setter.set(false);
        assert_eq!(closes.get_untracked(), 1);

        setter.set(true);
        assert_eq!(closes.get_untracked(), 1);
    }
}
