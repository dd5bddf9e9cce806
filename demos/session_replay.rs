use lumina_calc::Session;

fn main() {
    pretty_env_logger::init();

    let mut session = Session::new();

    // The key sequence a user might type: 12+30, commit, *2, commit,
    // then a scientific entry.
    for key in ["1", "2", "+", "3", "0"] {
        session.push_input(key);
        println!("{:<10} preview: {}", session.expression(), session.result());
    }
    session.commit();
    println!("=          result:  {}", session.result());

    for key in ["*", "2"] {
        session.push_input(key);
        println!("{:<10} preview: {}", session.expression(), session.result());
    }
    session.commit();
    println!("=          result:  {}", session.result());

    session.clear();
    for key in ["log10(", "1", "0", "0", "0"] {
        session.push_input(key);
        println!("{:<10} preview: {}", session.expression(), session.result());
    }
    session.commit();
    println!("=          result:  {}", session.result());

    println!("\nhistory (most recent first):");
    for item in session.history().items() {
        println!("  [{}] {} = {}", item.id, item.expression, item.result);
    }
}
