use std::{env, error::Error, process};

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm};

use credito_core::{
    cli::{detail_view, forms::PaymentForm, list_view, output},
    core::{
        services::{loan_service::PAGE_SIZE, LoanService},
        BookManager,
    },
    credit::{CreditBook, Frequency, Loan, Payment, Status},
    init,
    storage::JsonStorage,
    utils::format::format_amount,
};

fn main() {
    init();

    if let Err(err) = run() {
        output::error(err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let command = match args.first() {
        Some(command) => command.as_str(),
        None => {
            print_usage();
            process::exit(1);
        }
    };

    let storage = JsonStorage::new_default()?;
    let mut manager = BookManager::open(Box::new(storage))?;

    match command {
        "list" => cmd_list(&manager, &args[1..]),
        "show" => cmd_show(&manager, &args[1..]),
        "pay" => cmd_pay(&mut manager, &args[1..]),
        "unpay" => cmd_unpay(&mut manager, &args[1..]),
        "delete" => cmd_delete(&mut manager, &args[1..]),
        "seed" => cmd_seed(&mut manager, &args[1..]),
        _ => {
            print_usage();
            process::exit(1);
        }
    }
}

fn cmd_list(manager: &BookManager, args: &[String]) -> Result<(), Box<dyn Error>> {
    let mut status: Option<Status> = None;
    let mut frequency: Option<Frequency> = None;
    let mut page: usize = 1;

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| format!("falta el valor para {flag}"))?;
        match flag.as_str() {
            "--estado" => status = Some(value.parse()?),
            "--frecuencia" => frequency = Some(value.parse()?),
            "--pagina" => page = value.parse().map_err(|_| "página inválida".to_string())?,
            other => return Err(format!("opción desconocida: {other}").into()),
        }
    }

    let filtered = LoanService::filter(&manager.book().loans, status, frequency);
    let total_pages = LoanService::page_count(filtered.len(), PAGE_SIZE);
    let Some(page_loans) = LoanService::paginate(&filtered, PAGE_SIZE, page) else {
        return Err(format!("página fuera de rango (1..{})", total_pages.max(1)).into());
    };

    println!("{}", list_view::render_page(&page_loans, page, total_pages));
    Ok(())
}

fn cmd_show(manager: &BookManager, args: &[String]) -> Result<(), Box<dyn Error>> {
    let id = parse_id(args.first())?;
    let loan = manager.loan(id)?;
    println!("{}", detail_view::render(loan));
    Ok(())
}

fn cmd_pay(manager: &mut BookManager, args: &[String]) -> Result<(), Box<dyn Error>> {
    let [id, date, amount, receipt] = args else {
        return Err("uso: pay <id> <fecha> <monto> <comprobante>".into());
    };
    let id = parse_id(Some(id))?;
    let form = PaymentForm::parse(date, amount, receipt)?;

    let payment_id = manager.apply_payment(id, form.amount, form.date, &form.receipt)?;
    output::success("Pago registrado exitosamente");
    let loan = manager.loan(id)?;
    output::info(format!(
        "Pago {payment_id}; saldo pendiente ${}",
        format_amount(loan.balance)
    ));
    Ok(())
}

fn cmd_unpay(manager: &mut BookManager, args: &[String]) -> Result<(), Box<dyn Error>> {
    let id = parse_id(args.first())?;
    let payment_id = args
        .get(1)
        .ok_or("uso: unpay <id> <pago-id> [--yes]")?
        .parse::<i64>()
        .map_err(|_| "pago-id inválido".to_string())?;

    if !skip_confirm(args)
        && !confirm("¿Estás seguro de que deseas eliminar este pago?")?
    {
        output::info("Operación cancelada");
        return Ok(());
    }

    if manager.reverse_payment(id, payment_id)? {
        output::success("Pago eliminado correctamente");
    } else {
        output::warning("Pago no encontrado");
    }
    Ok(())
}

fn cmd_delete(manager: &mut BookManager, args: &[String]) -> Result<(), Box<dyn Error>> {
    let id = parse_id(args.first())?;

    if !skip_confirm(args)
        && !confirm("¿Estás seguro de que deseas eliminar este crédito?")?
    {
        output::info("Operación cancelada");
        return Ok(());
    }

    manager.delete_loan(id)?;
    output::success("Crédito eliminado correctamente");
    Ok(())
}

fn cmd_seed(manager: &mut BookManager, args: &[String]) -> Result<(), Box<dyn Error>> {
    if !manager.book().is_empty() && !args.iter().any(|arg| arg == "--force") {
        output::warning("El libro ya contiene créditos (usa --force para reemplazar)");
        return Ok(());
    }
    manager.replace(sample_book())?;
    output::success(format!(
        "Datos de ejemplo cargados ({} créditos)",
        manager.book().len()
    ));
    Ok(())
}

fn parse_id(arg: Option<&String>) -> Result<i64, Box<dyn Error>> {
    arg.ok_or("falta el id del crédito")?
        .parse::<i64>()
        .map_err(|_| "id inválido".into())
}

fn skip_confirm(args: &[String]) -> bool {
    args.iter().any(|arg| arg == "--yes")
}

fn confirm(prompt: &str) -> Result<bool, Box<dyn Error>> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

fn print_usage() {
    eprintln!(
        "Usage: credito_cli <command>\n\
         Commands:\n  \
         list [--estado E] [--frecuencia F] [--pagina N]\n  \
         show <id>\n  \
         pay <id> <fecha> <monto> <comprobante>\n  \
         unpay <id> <pago-id> [--yes]\n  \
         delete <id> [--yes]\n  \
         seed [--force]"
    );
}

fn sample_book() -> CreditBook {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    let payment = |id, fecha, monto: f64, comprobante: &str| {
        Payment::new(fecha, monto, comprobante).with_id(id)
    };

    let mut juan = Loan::new(
        1,
        "Juan Pérez",
        5000.0,
        250.0,
        50.0,
        Frequency::Monthly,
        date(2024, 1, 15),
        24,
    );
    juan.balance = 3500.0;
    juan.payments = vec![
        payment(1, date(2024, 2, 15), 300.0, "COMP-001"),
        payment(2, date(2024, 3, 15), 300.0, "COMP-002"),
        payment(3, date(2024, 4, 15), 300.0, "COMP-003"),
        payment(4, date(2024, 5, 15), 300.0, "COMP-004"),
        payment(5, date(2024, 6, 15), 300.0, "COMP-005"),
    ];

    let mut maria = Loan::new(
        2,
        "María González",
        10000.0,
        500.0,
        100.0,
        Frequency::Biweekly,
        date(2023, 6, 1),
        20,
    );
    maria.balance = 0.0;
    maria.status = Status::Paid;
    maria.payments = vec![
        payment(1, date(2023, 6, 15), 600.0, "COMP-006"),
        payment(2, date(2023, 7, 1), 600.0, "COMP-007"),
    ];

    let mut carlos = Loan::new(
        3,
        "Carlos Rodríguez",
        3000.0,
        150.0,
        30.0,
        Frequency::Monthly,
        date(2024, 2, 20),
        18,
    );
    carlos.balance = 2100.0;
    carlos.status = Status::Overdue;
    carlos.payments = vec![
        payment(1, date(2024, 3, 20), 180.0, "COMP-008"),
        payment(2, date(2024, 4, 20), 180.0, "COMP-009"),
        payment(3, date(2024, 5, 20), 180.0, "COMP-010"),
        payment(4, date(2024, 6, 20), 180.0, "COMP-011"),
        payment(5, date(2024, 7, 20), 180.0, "COMP-012"),
    ];

    CreditBook::new(vec![juan, maria, carlos])
}
