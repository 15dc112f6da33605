mod api;
mod models;
mod pages;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use api::{ApiClient, ApiError};
use pages::{AdvicePage, AuthScreen, DashboardPage, ExpensePage, GraphsPage, IncomePage,
    ProfilePage};

#[derive(Clone, Copy, PartialEq)]
enum AuthStatus {
    Checking,
    Authenticated,
    Unauthenticated,
}

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Dashboard,
    Income,
    Expense,
    Advice,
    Graphs,
    Profile,
}

#[derive(Properties, PartialEq)]
struct LayoutProps {
    children: Children,
    active_page: Page,
    on_select: Callback<Page>,
    on_logout: Callback<()>,
}

#[function_component(Layout)]
fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-background">
            <div class="hidden md:flex">
                <Sidebar active_page={props.active_page} on_select={props.on_select.clone()} on_logout={props.on_logout.clone()} />
            </div>

            <div class="flex-1 flex flex-col overflow-hidden">
                <Header />
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
            <span class="text-[#173E63] text-sm font-bold tracking-widest uppercase">{"Smart Expense Analysis"}</span>
            <span class="text-xs text-muted-foreground">{"Track, analyze, optimize"}</span>
        </header>
    }
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    active_page: Page,
    on_select: Callback<Page>,
    on_logout: Callback<()>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let nav_items = vec![
        NavItem {
            label: "Dashboard",
            page: Page::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            label: "Income Tracker",
            page: Page::Income,
            icon: icon_trending_up,
        },
        NavItem {
            label: "Expense Tracker",
            page: Page::Expense,
            icon: icon_credit_card,
        },
        NavItem {
            label: "Advice",
            page: Page::Advice,
            icon: icon_target,
        },
        NavItem {
            label: "Graphs",
            page: Page::Graphs,
            icon: icon_bar_chart,
        },
        NavItem {
            label: "Profile",
            page: Page::Profile,
            icon: icon_settings,
        },
    ];

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <div class="w-[220px] h-screen bg-[#D8E1E8] p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <div class="w-12 h-12 bg-[#173E63] rounded-full flex items-center justify-center text-white font-black">
                    {"V"}
                </div>
                <span class="text-[#173E63] text-2xl font-black tracking-tight">{"VITYA.AI"}</span>
            </div>

            <div class="flex-1 bg-[#173E63] rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                <nav class="flex-1 space-y-2">
                    { for nav_items.iter().map(|item| {
                        let is_active = item.page == props.active_page;
                        let class_name = if is_active {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-[#B2CBDE] text-[#173E63] w-full"
                        } else {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full"
                        };
                        let on_select = props.on_select.clone();
                        let page = item.page;

                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                                <span class="shrink-0">{ (item.icon)() }</span>
                                <span class="truncate whitespace-nowrap text-left">{ item.label }</span>
                            </button>
                        }
                    }) }
                </nav>

                <div class="mt-auto pt-4">
                    <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-white/10 transition-colors text-[13px] font-medium text-slate-300">
                        { icon_log_out() }
                        <span>{"Log Out"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let api = use_state(ApiClient::from_env);
    let api = (*api).clone();
    let active_page = use_state(|| Page::Dashboard);
    let auth_status = use_state(|| AuthStatus::Checking);

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    {
        let api = api.clone();
        let auth_status = auth_status.clone();
        use_effect_with_deps(
            move |_| {
                api.restore_session();
                if !api.is_logged_in() {
                    auth_status.set(AuthStatus::Unauthenticated);
                } else {
                    // A restored token may have expired server-side; one profile
                    // fetch decides. A network failure keeps the session.
                    spawn_local(async move {
                        match api.profile().await {
                            Ok(_) => auth_status.set(AuthStatus::Authenticated),
                            Err(ApiError::Network) => auth_status.set(AuthStatus::Authenticated),
                            Err(_) => {
                                api.logout();
                                auth_status.set(AuthStatus::Unauthenticated);
                            }
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    let on_logout = {
        let api = api.clone();
        let auth_status = auth_status.clone();
        let active_page = active_page.clone();
        Callback::from(move |_| {
            api.logout();
            active_page.set(Page::Dashboard);
            auth_status.set(AuthStatus::Unauthenticated);
        })
    };

    let content = match *auth_status {
        AuthStatus::Checking => html! {
            <div class="min-h-screen flex items-center justify-center bg-background text-muted-foreground">
                {"Checking session..."}
            </div>
        },
        AuthStatus::Unauthenticated => {
            let auth_status = auth_status.clone();
            html! {
                <AuthScreen on_authenticated={Callback::from(move |_| auth_status.set(AuthStatus::Authenticated))} />
            }
        }
        AuthStatus::Authenticated => {
            let page = match *active_page {
                Page::Dashboard => html! { <DashboardPage /> },
                Page::Income => html! { <IncomePage /> },
                Page::Expense => html! { <ExpensePage /> },
                Page::Advice => html! { <AdvicePage /> },
                Page::Graphs => html! { <GraphsPage /> },
                Page::Profile => html! { <ProfilePage /> },
            };
            html! {
                <Layout active_page={*active_page} on_select={on_select} on_logout={on_logout}>
                    { page }
                </Layout>
            }
        }
    };

    html! {
        <ContextProvider<ApiClient> context={api}>
            { content }
        </ContextProvider<ApiClient>>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-foreground">
            <path d={path}></path>
        </svg>
    }
}

fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
pub fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
fn icon_target() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0")
}
fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
fn icon_settings() -> Html {
    icon_base("M12 1v3M12 20v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M1 12h3M20 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1")
}
fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
pub fn icon_arrow_up_right() -> Html {
    icon_base("M7 17L17 7M7 7h10v10")
}
pub fn icon_download() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M7 10l5 5 5-5M12 15V3")
}

fn format_with_commas(value: i64) -> String {
    let s = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

pub fn format_amount(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let mut whole = abs.trunc() as i64;
    let mut cents = ((abs - abs.trunc()) * 100.0).round() as i64;
    if cents == 100 {
        whole += 1;
        cents = 0;
    }
    format!("{}₹ {}.{:02}", sign, format_with_commas(whole), cents)
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(1234567.5), "₹ 1,234,567.50");
        assert_eq!(format_amount(0.0), "₹ 0.00");
    }

    #[test]
    fn format_amount_keeps_sign_and_rounds() {
        assert_eq!(format_amount(-42.5), "-₹ 42.50");
        assert_eq!(format_amount(9.999), "₹ 10.00");
    }
}
