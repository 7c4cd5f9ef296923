use super::view_model::AccommodationViewModel;
use crate::layout::navigation_menu::NavigationMenu;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::page::follow_redirects;
use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a002_accommodation::aggregate::Accommodation;
use contracts::domain::common::AggregateRoot;
use contracts::shared::navigation::AppRoute;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AccommodationPage(hotel_id: HotelId) -> impl IntoView {
    let vm = AccommodationViewModel::new(hotel_id);
    follow_redirects(vm.page.redirect);
    vm.load();

    view! {
        <div class="page">
            <NavigationMenu current=AppRoute::Accommodations(hotel_id) />

            <PageHeader
                title={Accommodation::list_name()}
                subtitle="Categorías de ocupación del hotel"
                count=Signal::derive(move || Some(vm.page.state.with(|s| s.accommodations.len())))
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || vm.page.pending.get())
                    on_click=move |_| vm.load()
                >
                    {icon("refresh")}
                    " Actualizar"
                </Button>
            </PageHeader>

            <div class="details-form">
                <h3>
                    {move || if vm.is_edit_mode() { "Editar acomodación" } else { "Nueva acomodación" }}
                </h3>
                {move || vm.page.form_error.get().map(|e| view! { <div class="error">{e}</div> })}
                <Input
                    label="Nombre"
                    required=true
                    placeholder="Ej: Doble"
                    value=Signal::derive(move || vm.page.state.with(|s| s.form.name.clone()))
                    on_input=Callback::new(move |v: String| vm.set_name(v))
                />
                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.page.pending.get())
                        on_click=move |_| vm.submit()
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { " Guardar cambios" } else { " Agregar" }}
                    </Button>
                    <Show when=move || vm.is_edit_mode()>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel_edit()>
                            {icon("cancel")}
                            " Cancelar"
                        </Button>
                    </Show>
                </div>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Nombre"</TableHeaderCell>
                        <TableHeaderCell>"Creado"</TableHeaderCell>
                        <TableHeaderCell>"Acciones"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = vm.page.state.with(|s| s.accommodations.clone());
                        if rows.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>"No hay acomodaciones registradas"</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|accommodation| {
                                let id = accommodation.id;
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{accommodation.name}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>{accommodation.metadata.created_display()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| vm.begin_edit(id)
                                                >
                                                    {icon("edit")}
                                                    " Editar"
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    disabled=Signal::derive(move || vm.page.pending.get())
                                                    on_click=move |_| vm.remove(id)
                                                >
                                                    {icon("delete")}
                                                    " Eliminar"
                                                </Button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
